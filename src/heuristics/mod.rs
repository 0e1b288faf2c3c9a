//! Heuristic routing policies for single-block warehouses.
//!
//! - [`s_shape`] — Traverse every occupied aisle (Hall, 1993), O(a)
//! - [`largest_gap`] — Traverse the outer aisles, skip the largest gap in between (Hall, 1993), O(n)
//! - [`combined`] — Traverse or return per aisle, shortest over two states (Roodbergen & De Koster, 2001), O(a)
//! - [`combined_plus`] — Combined with two independent passes, shortest over four states, O(c)

mod combined;
mod combined_plus;
mod largest_gap;
mod s_shape;

pub use combined::combined;
pub use combined_plus::combined_plus;
pub use largest_gap::largest_gap;
pub use s_shape::s_shape;
