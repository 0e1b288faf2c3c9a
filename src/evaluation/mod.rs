//! Route plans and their conversion into picker time.
//!
//! - [`RoutePlan`] — distance plus the per-aisle decisions behind it
//! - [`AisleVisit`] — the ways a tour can cover one aisle
//! - [`ServiceTime`] — travel, picking, turning, and depot time of a plan

mod plan;
mod service_time;

pub use plan::{AisleDecision, AisleVisit, RoutePlan};
pub use service_time::ServiceTime;
