//! Exact routing for single-block warehouses.
//!
//! - [`ratliff_rosenthal`] — Shortest tour by dynamic programming over tour classes (Ratliff & Rosenthal, 1983), O(c)
//! - [`TourShape`] — The seven classes of partial tours the program keeps

mod ratliff_rosenthal;
mod tour_shape;

pub use ratliff_rosenthal::ratliff_rosenthal;
pub use tour_shape::TourShape;
