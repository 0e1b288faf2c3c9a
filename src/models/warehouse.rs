//! Warehouse layout and handling-time parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Product, Side};
use crate::error::ModelError;

/// Where the picker's depot sits on the front cross-aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepotPlacement {
    /// In front of aisle 0.
    #[default]
    Corner,
    /// Halfway along the front cross-aisle.
    Center,
}

/// A single-block rectangular warehouse with a front and a back cross-aisle.
///
/// Aisles are numbered `0..number_of_aisles` from left to right and spaced
/// one [`pitch`](Warehouse::pitch) apart. Each aisle has shelves on both sides
/// of length `shelf_length`, measured from the front cross-aisle.
///
/// The layout is immutable once built; every routing policy only reads it.
///
/// # Examples
///
/// ```
/// use u_picking::models::{DepotPlacement, Warehouse};
///
/// let w = Warehouse::new(10, 20.0, 1.0, 2.0)
///     .unwrap()
///     .with_depot(DepotPlacement::Center);
/// assert_eq!(w.number_of_aisles(), 10);
/// assert_eq!(w.pitch(), 3.0);
/// assert_eq!(w.depot_position(), 4.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    number_of_aisles: usize,
    shelf_length: f64,
    shelf_width: f64,
    aisle_width: f64,
    depot: DepotPlacement,
    travel_speed: f64,
    picking_time_per_item: f64,
    outside_turn_time: f64,
    inside_turn_time: f64,
    depot_time: f64,
}

impl Warehouse {
    /// Creates a warehouse with the given geometry.
    ///
    /// Defaults: corner depot, travel speed 1.0, all handling times zero
    /// (so service time equals travel distance).
    pub fn new(
        number_of_aisles: usize,
        shelf_length: f64,
        shelf_width: f64,
        aisle_width: f64,
    ) -> Result<Self, ModelError> {
        WarehouseConfig {
            number_of_aisles,
            shelf_length,
            shelf_width,
            aisle_width,
            ..WarehouseConfig::default()
        }
        .build()
    }

    /// Sets the depot placement.
    pub fn with_depot(mut self, depot: DepotPlacement) -> Self {
        self.depot = depot;
        self
    }

    /// Number of aisles.
    pub fn number_of_aisles(&self) -> usize {
        self.number_of_aisles
    }

    /// Length of a shelf (and of the pickable part of an aisle).
    pub fn shelf_length(&self) -> f64 {
        self.shelf_length
    }

    /// Depth of a shelf between two neighbouring aisles.
    pub fn shelf_width(&self) -> f64 {
        self.shelf_width
    }

    /// Width of an aisle; also the width of each cross-aisle.
    pub fn aisle_width(&self) -> f64 {
        self.aisle_width
    }

    /// Depot placement.
    pub fn depot(&self) -> DepotPlacement {
        self.depot
    }

    /// Picker travel speed (distance units per time unit).
    pub fn travel_speed(&self) -> f64 {
        self.travel_speed
    }

    /// Time spent picking one item.
    pub fn picking_time_per_item(&self) -> f64 {
        self.picking_time_per_item
    }

    /// Time for a turn between an aisle and a cross-aisle.
    pub fn outside_turn_time(&self) -> f64 {
        self.outside_turn_time
    }

    /// Time for turning around inside an aisle.
    pub fn inside_turn_time(&self) -> f64 {
        self.inside_turn_time
    }

    /// Fixed set-up time at the depot per tour.
    pub fn depot_time(&self) -> f64 {
        self.depot_time
    }

    /// Lateral distance between the centre lines of two adjacent aisles.
    pub fn pitch(&self) -> f64 {
        self.shelf_width + self.aisle_width
    }

    /// Distance to walk an aisle from one cross-aisle to the other.
    pub fn aisle_traversal(&self) -> f64 {
        self.shelf_length + self.aisle_width
    }

    /// Depot location on the front cross-aisle, in aisle pitches.
    ///
    /// `0.0` for a corner depot. For a centre depot this is
    /// `(number_of_aisles - 1) / 2`: the middle aisle when the count is odd,
    /// halfway between the two middle aisles when it is even.
    pub fn depot_position(&self) -> f64 {
        match self.depot {
            DepotPlacement::Corner => 0.0,
            DepotPlacement::Center => (self.number_of_aisles - 1) as f64 / 2.0,
        }
    }

    /// Builds a product after checking it fits this layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_picking::models::{Side, Warehouse};
    ///
    /// let w = Warehouse::new(4, 10.0, 1.0, 2.0).unwrap();
    /// assert!(w.product(1, 3, Side::Left, 7.5, 1.0).is_ok());
    /// assert!(w.product(2, 4, Side::Left, 7.5, 1.0).is_err());
    /// assert!(w.product(3, 0, Side::Right, 10.5, 1.0).is_err());
    /// ```
    pub fn product(
        &self,
        id: usize,
        aisle: usize,
        side: Side,
        height: f64,
        weight: f64,
    ) -> Result<Product, ModelError> {
        let product = Product::new(id, aisle, side, height, weight)?;
        self.check_product(&product)?;
        Ok(product)
    }

    /// Checks that a product's aisle and height lie inside this layout.
    pub fn check_product(&self, product: &Product) -> Result<(), ModelError> {
        if product.aisle() >= self.number_of_aisles {
            return Err(ModelError::AisleOutOfRange {
                aisle: product.aisle(),
                aisles: self.number_of_aisles,
            });
        }
        if product.height() > self.shelf_length {
            return Err(ModelError::HeightOutOfRange {
                height: product.height(),
                shelf_length: self.shelf_length,
            });
        }
        Ok(())
    }
}

impl TryFrom<WarehouseConfig> for Warehouse {
    type Error = ModelError;

    fn try_from(config: WarehouseConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

/// Plain, serialisable description of a [`Warehouse`].
///
/// Missing fields fall back to [`WarehouseConfig::default`], so a JSON file
/// only needs the values that differ.
///
/// # Examples
///
/// ```
/// use u_picking::models::{DepotPlacement, WarehouseConfig};
///
/// let json = r#"{ "number_of_aisles": 6, "shelf_length": 12.0, "depot": "center" }"#;
/// let warehouse = WarehouseConfig::from_json(json).unwrap().build().unwrap();
/// assert_eq!(warehouse.number_of_aisles(), 6);
/// assert_eq!(warehouse.depot(), DepotPlacement::Center);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseConfig {
    pub number_of_aisles: usize,
    pub shelf_length: f64,
    pub shelf_width: f64,
    pub aisle_width: f64,
    pub depot: DepotPlacement,
    pub travel_speed: f64,
    pub picking_time_per_item: f64,
    pub outside_turn_time: f64,
    pub inside_turn_time: f64,
    pub depot_time: f64,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            number_of_aisles: 10,
            shelf_length: 10.0,
            shelf_width: 1.0,
            aisle_width: 2.0,
            depot: DepotPlacement::Corner,
            travel_speed: 1.0,
            picking_time_per_item: 0.0,
            outside_turn_time: 0.0,
            inside_turn_time: 0.0,
            depot_time: 0.0,
        }
    }
}

impl WarehouseConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            aisles = config.number_of_aisles,
            depot = ?config.depot,
            "loaded warehouse configuration"
        );
        Ok(config)
    }

    /// Validates the configuration and builds the warehouse.
    pub fn build(self) -> Result<Warehouse, ModelError> {
        if self.number_of_aisles == 0 {
            return Err(ModelError::NoAisles);
        }
        positive("shelf_length", self.shelf_length)?;
        positive("aisle_width", self.aisle_width)?;
        positive("travel_speed", self.travel_speed)?;
        non_negative("shelf_width", self.shelf_width)?;
        non_negative("picking_time_per_item", self.picking_time_per_item)?;
        non_negative("outside_turn_time", self.outside_turn_time)?;
        non_negative("inside_turn_time", self.inside_turn_time)?;
        non_negative("depot_time", self.depot_time)?;

        Ok(Warehouse {
            number_of_aisles: self.number_of_aisles,
            shelf_length: self.shelf_length,
            shelf_width: self.shelf_width,
            aisle_width: self.aisle_width,
            depot: self.depot,
            travel_speed: self.travel_speed,
            picking_time_per_item: self.picking_time_per_item,
            outside_turn_time: self.outside_turn_time,
            inside_turn_time: self.inside_turn_time,
            depot_time: self.depot_time,
        })
    }
}

impl From<&Warehouse> for WarehouseConfig {
    fn from(w: &Warehouse) -> Self {
        Self {
            number_of_aisles: w.number_of_aisles,
            shelf_length: w.shelf_length,
            shelf_width: w.shelf_width,
            aisle_width: w.aisle_width,
            depot: w.depot,
            travel_speed: w.travel_speed,
            picking_time_per_item: w.picking_time_per_item,
            outside_turn_time: w.outside_turn_time,
            inside_turn_time: w.inside_turn_time,
            depot_time: w.depot_time,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::NonPositiveDimension { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::NegativeValue { name, value })
    }
}
