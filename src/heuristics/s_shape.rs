//! S-shape (traversal) routing.
//!
//! # Algorithm
//!
//! Every aisle holding a requested item is walked completely, so the picker
//! snakes through the warehouse alternating between the front and the back
//! cross-aisle. With an odd number of occupied aisles the picker would end
//! up on the back cross-aisle, so the last aisle is instead entered from the
//! front up to its farthest item and left the same way.
//!
//! # Complexity
//!
//! O(a) over the occupied aisles, after extraction.
//!
//! # Reference
//!
//! Hall, R.W. (1993). "Distance approximations for routing manual pickers
//! in a warehouse", *IIE Transactions* 25(4), 76-87.

use crate::distance::cross_aisle_distance;
use crate::evaluation::{AisleDecision, AisleVisit, RoutePlan};
use crate::models::Warehouse;
use crate::occupancy::AisleOccupancy;

/// Routes a batch with the S-shape policy.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Batch, Order, Side, Warehouse};
/// use u_picking::occupancy::AisleOccupancy;
/// use u_picking::heuristics::s_shape;
///
/// let w = Warehouse::new(3, 10.0, 1.0, 2.0).unwrap();
/// let mut batch = Batch::new(100.0);
/// batch.add_order(Order::new(1, 0.0, 0.0, vec![
///     w.product(1, 0, Side::Left, 3.0, 1.0).unwrap(),
///     w.product(2, 1, Side::Left, 8.0, 1.0).unwrap(),
///     w.product(3, 2, Side::Left, 2.0, 1.0).unwrap(),
/// ])).unwrap();
///
/// let plan = s_shape(&w, &AisleOccupancy::from_batch(&w, &batch));
/// // two traversals (12 each) + partial last aisle (2 + 2·2) + cross-aisles 12
/// assert!((plan.distance() - 42.0).abs() < 1e-10);
/// ```
pub fn s_shape(warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
    let Some((min_aisle, max_aisle)) = occupancy.range() else {
        return RoutePlan::empty();
    };

    let count = occupancy.num_occupied();
    let returns_in_last = count % 2 == 1;

    let decisions = occupancy
        .occupied()
        .enumerate()
        .map(|(k, (aisle, heights))| {
            let visit = if returns_in_last && k + 1 == count {
                AisleVisit::from_front(heights)
            } else {
                AisleVisit::Traverse
            };
            AisleDecision { aisle, visit }
        })
        .collect();

    RoutePlan::new(
        warehouse,
        cross_aisle_distance(warehouse, min_aisle, max_aisle),
        decisions,
        occupancy.item_count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepotPlacement;

    fn warehouse(aisles: usize) -> Warehouse {
        Warehouse::new(aisles, 10.0, 1.0, 2.0).expect("valid")
    }

    fn occupancy(w: &Warehouse, items: &[(usize, f64)]) -> AisleOccupancy {
        let mut occ = AisleOccupancy::empty(w);
        for &(aisle, h) in items {
            occ.insert(w, aisle, h);
        }
        occ
    }

    #[test]
    fn test_empty() {
        let w = warehouse(3);
        let plan = s_shape(&w, &AisleOccupancy::empty(&w));
        assert_eq!(plan.distance(), 0.0);
        assert!(plan.decisions().is_empty());
    }

    #[test]
    fn test_odd_count_returns_in_last_aisle() {
        let w = warehouse(3);
        let occ = occupancy(&w, &[(0, 3.0), (1, 8.0), (2, 2.0)]);
        let plan = s_shape(&w, &occ);
        assert!((plan.cross_aisle() - 12.0).abs() < 1e-10);
        assert!((plan.distance() - 42.0).abs() < 1e-10);
        assert_eq!(plan.decision(0), Some(&AisleVisit::Traverse));
        assert_eq!(plan.decision(1), Some(&AisleVisit::Traverse));
        assert_eq!(plan.decision(2), Some(&AisleVisit::FromFront { depth: 2.0 }));
    }

    #[test]
    fn test_even_count_traverses_all() {
        let w = warehouse(5);
        let occ = occupancy(&w, &[(1, 1.0), (4, 1.0)]);
        let plan = s_shape(&w, &occ);
        // 2 · 12 + 2 · 3 · 4
        assert!((plan.distance() - 48.0).abs() < 1e-10);
        assert!(plan
            .decisions()
            .iter()
            .all(|d| d.visit == AisleVisit::Traverse));
    }

    #[test]
    fn test_single_aisle() {
        let w = warehouse(1);
        let occ = occupancy(&w, &[(0, 4.0), (0, 1.0)]);
        let plan = s_shape(&w, &occ);
        assert!((plan.distance() - (2.0 + 8.0)).abs() < 1e-10);
    }

    #[test]
    fn test_center_depot() {
        let w = warehouse(5).with_depot(DepotPlacement::Center);
        let occ = occupancy(&w, &[(0, 5.0), (4, 5.0)]);
        let plan = s_shape(&w, &occ);
        // 2 · 12 + 2 · 3 · 4
        assert!((plan.distance() - 48.0).abs() < 1e-10);
    }
}
