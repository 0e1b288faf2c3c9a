//! Domain model types for warehouse order picking.
//!
//! Provides the warehouse layout (aisles, shelves, depot, handling times),
//! the products requested by customer orders, and weight-bounded batches of
//! orders that one picker collects in a single tour.

mod batch;
mod order;
mod product;
mod warehouse;

pub use batch::Batch;
pub use order::Order;
pub use product::{Product, Side};
pub use warehouse::{DepotPlacement, Warehouse, WarehouseConfig};
