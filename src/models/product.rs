//! Product and shelf side types.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The side of an aisle a product is stored on.
///
/// Both sides of an aisle are reachable from its centre line, so the side
/// never changes a travel distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl TryFrom<u8> for Side {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Side::Left),
            1 => Ok(Side::Right),
            other => Err(ModelError::InvalidSide(other)),
        }
    }
}

/// A requested item, stored in one aisle at a given height.
///
/// Height is measured along the aisle from the front cross-aisle. Use
/// [`Warehouse::product`](crate::models::Warehouse::product) to also check
/// the aisle and height against a concrete layout.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Product, Side};
///
/// let p = Product::new(7, 2, Side::Right, 4.5, 1.2).unwrap();
/// assert_eq!(p.aisle(), 2);
/// assert_eq!(p.height(), 4.5);
/// assert!(Product::new(8, 2, Side::Left, -1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: usize,
    aisle: usize,
    side: Side,
    height: f64,
    weight: f64,
}

impl Product {
    /// Creates a product.
    ///
    /// Fails if the height is negative or non-finite, or if the weight is
    /// not strictly positive.
    pub fn new(
        id: usize,
        aisle: usize,
        side: Side,
        height: f64,
        weight: f64,
    ) -> Result<Self, ModelError> {
        if !height.is_finite() || height < 0.0 {
            return Err(ModelError::NegativeValue {
                name: "height",
                value: height,
            });
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ModelError::InvalidWeight(weight));
        }
        Ok(Self {
            id,
            aisle,
            side,
            height,
            weight,
        })
    }

    /// Product ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Aisle index.
    pub fn aisle(&self) -> usize {
        self.aisle
    }

    /// Shelf side within the aisle.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Position along the aisle, measured from the front cross-aisle.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight of the product.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
