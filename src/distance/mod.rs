//! Cross-aisle geometry shared by every routing policy.
//!
//! Provides the closed-form lateral travel distance and the ordered list of
//! cross-aisle positions (tour columns) walked by the dynamic programs.

mod columns;
mod cross_aisle;

pub use columns::{tour_columns, Column};
pub use cross_aisle::cross_aisle_distance;
