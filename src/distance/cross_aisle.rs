//! Lateral travel along the cross-aisles.

use crate::models::Warehouse;

/// Distance walked along the cross-aisles by any tour that starts and ends
/// at the depot and visits every aisle in `min_aisle..=max_aisle`.
///
/// The picker has to reach the leftmost and the rightmost of the depot and
/// the occupied aisles and come back, so the lateral distance is twice that
/// span:
///
/// ```text
/// 2 · pitch · (max(d, max_aisle) − min(d, min_aisle))
/// ```
///
/// with `d` the [depot position](Warehouse::depot_position) in pitches. For
/// a corner depot this is `2 · pitch · max_aisle`. For a centre depot and an
/// even aisle count the depot sits half a pitch left of aisle `N / 2`, which
/// adds `pitch / 2` each way when the occupied range lies to one side of it.
///
/// # Examples
///
/// ```
/// use u_picking::models::{DepotPlacement, Warehouse};
/// use u_picking::distance::cross_aisle_distance;
///
/// let w = Warehouse::new(6, 10.0, 1.0, 2.0).unwrap();
/// assert_eq!(cross_aisle_distance(&w, 2, 4), 24.0);
///
/// let center = w.with_depot(DepotPlacement::Center);
/// // depot at 2.5 pitches, occupied 3..=5: 2 · 3 · (5 − 2.5)
/// assert_eq!(cross_aisle_distance(&center, 3, 5), 15.0);
/// ```
pub fn cross_aisle_distance(warehouse: &Warehouse, min_aisle: usize, max_aisle: usize) -> f64 {
    let depot = warehouse.depot_position();
    let right = depot.max(max_aisle as f64);
    let left = depot.min(min_aisle as f64);
    2.0 * warehouse.pitch() * (right - left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepotPlacement;

    fn warehouse(aisles: usize, depot: DepotPlacement) -> Warehouse {
        Warehouse::new(aisles, 10.0, 1.0, 2.0)
            .expect("valid")
            .with_depot(depot)
    }

    #[test]
    fn test_corner_depends_on_max_only() {
        let w = warehouse(5, DepotPlacement::Corner);
        assert!((cross_aisle_distance(&w, 0, 0)).abs() < 1e-10);
        assert!((cross_aisle_distance(&w, 0, 2) - 12.0).abs() < 1e-10);
        assert!((cross_aisle_distance(&w, 2, 2) - 12.0).abs() < 1e-10);
        assert!((cross_aisle_distance(&w, 1, 4) - 24.0).abs() < 1e-10);
    }

    #[test]
    fn test_center_odd_straddling() {
        // depot in front of aisle 2
        let w = warehouse(5, DepotPlacement::Center);
        assert!((cross_aisle_distance(&w, 1, 3) - 12.0).abs() < 1e-10);
        assert!((cross_aisle_distance(&w, 2, 2)).abs() < 1e-10);
    }

    #[test]
    fn test_center_odd_one_side() {
        let w = warehouse(5, DepotPlacement::Center);
        // right of the depot: 2 · 3 · (4 − 2)
        assert!((cross_aisle_distance(&w, 3, 4) - 12.0).abs() < 1e-10);
        // left of the depot: 2 · 3 · (2 − 0)
        assert!((cross_aisle_distance(&w, 0, 1) - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_center_even_half_pitch() {
        // depot at 1.5 pitches, between aisles 1 and 2
        let w = warehouse(4, DepotPlacement::Center);
        // 2 · [3/2 + 3 · (3 − 2)]
        assert!((cross_aisle_distance(&w, 2, 3) - 9.0).abs() < 1e-10);
        // 2 · [3/2 + 3 · (1 − 0)]
        assert!((cross_aisle_distance(&w, 0, 1) - 9.0).abs() < 1e-10);
        // straddling: 2 · 3 · (3 − 0)
        assert!((cross_aisle_distance(&w, 0, 3) - 18.0).abs() < 1e-10);
        // single aisle right next to the depot
        assert!((cross_aisle_distance(&w, 2, 2) - 3.0).abs() < 1e-10);
    }
}
