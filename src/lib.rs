//! # u-picking
//!
//! Order-picking routing for single-block warehouses: the distance and
//! service time a picker needs to collect a batch of orders, under the
//! S-shape, largest-gap, combined, and combined-plus heuristics and the exact
//! Ratliff-Rosenthal procedure.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Warehouse, Product, Order, Batch, WarehouseConfig)
//! - [`occupancy`] — Per-aisle requested heights and gaps of a batch
//! - [`distance`] — Cross-aisle distance and tour columns
//! - [`evaluation`] — Route plans, per-aisle visits, and service time
//! - [`heuristics`] — S-shape, largest gap, combined, combined-plus
//! - [`exact`] — Ratliff-Rosenthal dynamic program
//! - [`policy`] — Policy selection, batch costing, parallel batch evaluation
//!
//! ## Example
//!
//! ```
//! use u_picking::models::{Batch, Order, Side, WarehouseConfig};
//! use u_picking::policy::{compute_cost, RoutingPolicy};
//!
//! let warehouse = WarehouseConfig::from_json(r#"{ "number_of_aisles": 3 }"#)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut batch = Batch::new(20.0);
//! batch.add_order(Order::new(1, 0.0, 0.0, vec![
//!     warehouse.product(1, 0, Side::Left, 3.0, 1.0).unwrap(),
//!     warehouse.product(2, 2, Side::Right, 2.0, 1.0).unwrap(),
//! ])).unwrap();
//!
//! let exact = compute_cost(RoutingPolicy::RatliffRosenthal, &warehouse, &batch);
//! let s_shape = compute_cost(RoutingPolicy::SShape, &warehouse, &batch);
//! assert!(exact <= s_shape);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod heuristics;
pub mod models;
pub mod occupancy;
pub mod policy;

pub use error::ModelError;
