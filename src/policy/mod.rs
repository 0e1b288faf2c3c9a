//! Policy selection and batch costing.
//!
//! - [`RoutingPolicy`] — closed set of policies, parsed from their identifiers
//! - [`RoutingStrategy`] — the routing interface, one implementation per policy
//! - [`compute_cost`] — service time of one batch under a policy
//! - [`evaluate_batches`] — service times of many candidate batches in parallel

mod selector;
mod strategy;

pub use selector::{compute_cost, evaluate_batches, RoutingPolicy};
pub use strategy::{Combined, CombinedPlus, LargestGap, RatliffRosenthal, RoutingStrategy, SShape};
