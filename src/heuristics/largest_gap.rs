//! Largest-gap routing.
//!
//! # Algorithm
//!
//! The picker walks the first occupied aisle completely to the back
//! cross-aisle, follows it to the last occupied aisle, walks that one
//! completely back to the front, and returns to the depot along the front
//! cross-aisle. Every aisle in between is visited from both cross-aisles
//! without crossing it: the picker skips the aisle's largest gap, entering
//! from the back down to the gap on the way out and from the front up to
//! the gap on the way home.
//!
//! Gaps are compared by the time of the visit that skips them. A gap
//! between two items needs entries from both ends, one aisle width and one
//! turn-around more than a gap touching an end, so it has to be longer by
//! half an aisle width (and the extra turns) to be preferred.
//!
//! # Complexity
//!
//! O(n) over the requested items, after extraction.
//!
//! # Reference
//!
//! Hall, R.W. (1993). "Distance approximations for routing manual pickers
//! in a warehouse", *IIE Transactions* 25(4), 76-87.

use crate::distance::cross_aisle_distance;
use crate::evaluation::{AisleDecision, AisleVisit, RoutePlan};
use crate::models::Warehouse;
use crate::occupancy::AisleOccupancy;

/// Routes a batch with the largest-gap policy.
///
/// A single occupied aisle is entered from the front and left the same way.
///
/// # Examples
///
/// ```
/// use u_picking::models::Warehouse;
/// use u_picking::occupancy::AisleOccupancy;
/// use u_picking::heuristics::largest_gap;
/// use u_picking::evaluation::AisleVisit;
///
/// let w = Warehouse::new(3, 10.0, 1.0, 2.0).unwrap();
/// let mut occ = AisleOccupancy::empty(&w);
/// occ.insert(&w, 0, 3.0);
/// occ.insert(&w, 1, 8.0);
/// occ.insert(&w, 2, 2.0);
///
/// let plan = largest_gap(&w, &occ);
/// assert_eq!(plan.decision(1), Some(&AisleVisit::FromBack { depth: 8.0 }));
/// // 12 + (2 + 2·2) + 12 + 12
/// assert!((plan.distance() - 42.0).abs() < 1e-10);
/// ```
pub fn largest_gap(warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
    let Some((min_aisle, max_aisle)) = occupancy.range() else {
        return RoutePlan::empty();
    };

    let decisions = occupancy
        .occupied()
        .map(|(aisle, heights)| {
            let visit = if min_aisle == max_aisle {
                AisleVisit::from_front(heights)
            } else if aisle == min_aisle || aisle == max_aisle {
                AisleVisit::Traverse
            } else {
                AisleVisit::largest_gap(heights, warehouse)
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
