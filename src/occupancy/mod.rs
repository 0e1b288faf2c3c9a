//! Aisle-occupancy extraction.
//!
//! Every routing policy starts by grouping the batch's requested items per
//! aisle: sorted heights between the `0` and `shelf_length` sentinels, and
//! the range of occupied aisles.

mod aisle;
mod extraction;

pub use aisle::{AisleHeights, Gap, GapPosition};
pub use extraction::AisleOccupancy;
