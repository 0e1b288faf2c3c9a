//! Cross-aisle positions a tour passes, from left to right.

use crate::models::Warehouse;
use crate::occupancy::AisleOccupancy;

/// A lateral position on the cross-aisles that a tour may stop at.
///
/// Either an aisle (possibly without requested items) or the depot when it
/// lies between two aisles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Lateral position in aisle pitches.
    pub position: f64,
    /// Aisle at this position; `None` for a depot between aisles.
    pub aisle: Option<usize>,
    /// Whether the depot sits on the front cross-aisle here.
    pub depot: bool,
}

/// Lists every column between the leftmost and the rightmost point the tour
/// must reach (depot and occupied aisles), in ascending order.
///
/// Empty aisles inside that span are included: a tour may pass through them
/// to switch cross-aisles.
///
/// Returns an empty list when nothing is requested.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Batch, Order, Side, Warehouse, DepotPlacement};
/// use u_picking::occupancy::AisleOccupancy;
/// use u_picking::distance::tour_columns;
///
/// let w = Warehouse::new(4, 10.0, 1.0, 2.0).unwrap().with_depot(DepotPlacement::Center);
/// let mut batch = Batch::new(10.0);
/// batch.add_order(Order::new(1, 0.0, 0.0, vec![w.product(1, 3, Side::Left, 5.0, 1.0).unwrap()])).unwrap();
///
/// let columns = tour_columns(&w, &AisleOccupancy::from_batch(&w, &batch));
/// let positions: Vec<f64> = columns.iter().map(|c| c.position).collect();
/// assert_eq!(positions, vec![1.5, 2.0, 3.0]);
/// assert!(columns[0].depot && columns[0].aisle.is_none());
/// ```
pub fn tour_columns(warehouse: &Warehouse, occupancy: &AisleOccupancy) -> Vec<Column> {
    let Some((min_aisle, max_aisle)) = occupancy.range() else {
        return Vec::new();
    };

    let depot = warehouse.depot_position();
    let first = min_aisle.min(depot.ceil() as usize);
    let last = max_aisle.max(depot.floor() as usize);

    let mut columns: Vec<Column> = (first..=last)
        .map(|aisle| Column {
            position: aisle as f64,
            aisle: Some(aisle),
            depot: aisle as f64 == depot,
        })
        .collect();

    if depot.fract() != 0.0 {
        let at = columns.partition_point(|c| c.position < depot);
        columns.insert(
            at,
            Column {
                position: depot,
                aisle: None,
                depot: true,
            },
        );
    }

    columns
}
