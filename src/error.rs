//! Validation errors for warehouse layouts, products, and batches.

use thiserror::Error;

/// Errors raised while constructing the routing data model.
///
/// These indicate a malformed instance handed over by the caller (loader or
/// batching heuristic). They are reported at construction time so that the
/// routing policies never see invalid geometry.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("warehouse must have at least one aisle")]
    NoAisles,

    #[error("{name} must be a positive finite number, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    NegativeValue { name: &'static str, value: f64 },

    #[error("aisle {aisle} is outside the warehouse (0..{aisles})")]
    AisleOutOfRange { aisle: usize, aisles: usize },

    #[error("height {height} is outside the shelf (0..={shelf_length})")]
    HeightOutOfRange { height: f64, shelf_length: f64 },

    #[error("product weight must be positive, got {0}")]
    InvalidWeight(f64),

    #[error("side must be 0 (left) or 1 (right), got {0}")]
    InvalidSide(u8),

    #[error("order {order_id} weighs {weight}, batch has {remaining} capacity left")]
    CapacityExceeded {
        order_id: usize,
        weight: f64,
        remaining: f64,
    },

    #[error("unknown routing policy: {0}")]
    UnknownPolicy(String),

    #[error("invalid warehouse configuration: {0}")]
    Config(#[from] serde_json::Error),
}
