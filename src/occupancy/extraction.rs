//! Per-batch aisle occupancy.

use super::AisleHeights;
use crate::models::{Batch, Warehouse};

/// Requested heights of a batch, grouped by aisle.
///
/// One slot per warehouse aisle (aisle indices are dense), plus the range
/// of occupied aisles and the total number of items. Built fresh for every
/// cost evaluation since batches change between calls.
///
/// # Panics
///
/// [`from_batch`](AisleOccupancy::from_batch) panics if a product lies in
/// an aisle or at a height outside the warehouse. Such a batch breaks the
/// contract with the instance loader and is a caller bug.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Batch, Order, Side, Warehouse};
/// use u_picking::occupancy::AisleOccupancy;
///
/// let w = Warehouse::new(5, 10.0, 1.0, 2.0).unwrap();
/// let mut batch = Batch::new(100.0);
/// batch.add_order(Order::new(1, 0.0, 0.0, vec![
///     w.product(1, 3, Side::Left, 4.0, 1.0).unwrap(),
///     w.product(2, 1, Side::Right, 8.0, 1.0).unwrap(),
///     w.product(3, 3, Side::Right, 4.0, 1.0).unwrap(),
/// ])).unwrap();
///
/// let occ = AisleOccupancy::from_batch(&w, &batch);
/// assert_eq!(occ.range(), Some((1, 3)));
/// assert_eq!(occ.num_occupied(), 2);
/// assert_eq!(occ.item_count(), 3);
/// assert_eq!(occ.aisle(3).unwrap().heights(), &[4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AisleOccupancy {
    aisles: Vec<AisleHeights>,
    range: Option<(usize, usize)>,
    item_count: usize,
}

impl AisleOccupancy {
    /// Creates an occupancy with every aisle empty.
    pub fn empty(warehouse: &Warehouse) -> Self {
        Self {
            aisles: vec![AisleHeights::new(warehouse.shelf_length()); warehouse.number_of_aisles()],
            range: None,
            item_count: 0,
        }
    }

    /// Collects the requested heights of every product in the batch.
    pub fn from_batch(warehouse: &Warehouse, batch: &Batch) -> Self {
        let mut occupancy = Self::empty(warehouse);
        for product in batch.products() {
            occupancy.insert(warehouse, product.aisle(), product.height());
        }
        occupancy
    }

    /// Adds one requested item.
    ///
    /// # Panics
    ///
    /// Panics if the aisle or height is outside the warehouse.
    pub fn insert(&mut self, warehouse: &Warehouse, aisle: usize, height: f64) {
        assert!(
            aisle < self.aisles.len(),
            "aisle {aisle} outside warehouse with {} aisles",
            self.aisles.len()
        );
        assert!(
            (0.0..=warehouse.shelf_length()).contains(&height),
            "height {height} outside shelf of length {}",
            warehouse.shelf_length()
        );

        self.aisles[aisle].insert(height);
        self.item_count += 1;
        self.range = Some(match self.range {
            None => (aisle, aisle),
            Some((lo, hi)) => (lo.min(aisle), hi.max(aisle)),
        });
    }

    /// Heights requested in the given aisle, if it is occupied.
    pub fn aisle(&self, aisle: usize) -> Option<&AisleHeights> {
        self.aisles.get(aisle).filter(|a| !a.is_empty())
    }

    /// Slot for the given aisle, occupied or not.
    ///
    /// # Panics
    ///
    /// Panics if the aisle index is outside the warehouse.
    pub fn slot(&self, aisle: usize) -> &AisleHeights {
        &self.aisles[aisle]
    }

    /// Occupied aisles in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &AisleHeights)> {
        self.aisles
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.is_empty())
    }

    /// Number of occupied aisles.
    pub fn num_occupied(&self) -> usize {
        self.occupied().count()
    }

    /// `(min_aisle, max_aisle)` over occupied aisles.
    pub fn range(&self) -> Option<(usize, usize)> {
        self.range
    }

    /// Lowest occupied aisle index.
    pub fn min_aisle(&self) -> Option<usize> {
        self.range.map(|(lo, _)| lo)
    }

    /// Highest occupied aisle index.
    pub fn max_aisle(&self) -> Option<usize> {
        self.range.map(|(_, hi)| hi)
    }

    /// Total number of items, counting repeated heights separately.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns `true` if no item is requested.
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }
}
