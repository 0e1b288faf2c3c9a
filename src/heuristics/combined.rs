//! Combined routing: S-shape and largest-gap decided per aisle.
//!
//! # Algorithm
//!
//! The outbound pass visits the occupied aisles left to right. In each aisle
//! the picker either crosses it completely, switching cross-aisles, or
//! serves it from the cross-aisle it is currently on and stays there: up to
//! the farthest item when on the front, or by skipping the largest gap when
//! on the back. The return to the depot runs along the front cross-aisle,
//! so the outbound pass has to finish on the front.
//!
//! Rather than committing greedily, the choice is a shortest path over the
//! two states (front, back) per aisle, the same cost/predecessor layout as
//! a split procedure. A greedy choice can get cheaper when an item is added,
//! which a batching objective must never see. Visits are weighed by their
//! time in the aisle, turns included, so the tour is also never slower for
//! an added item.
//!
//! # Complexity
//!
//! O(a) over the occupied aisles, after extraction.
//!
//! # Reference
//!
//! Roodbergen, K.J. & De Koster, R. (2001). "Routing methods for warehouses
//! with multiple cross aisles", *International Journal of Production
//! Research* 39(9), 1865-1883.

use crate::distance::cross_aisle_distance;
use crate::evaluation::{AisleDecision, AisleVisit, RoutePlan};
use crate::models::Warehouse;
use crate::occupancy::{AisleHeights, AisleOccupancy};

/// The cross-aisle a pass of the picker is walking on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CrossAisle {
    Front,
    Back,
}

impl CrossAisle {
    pub(super) const BOTH: [CrossAisle; 2] = [CrossAisle::Front, CrossAisle::Back];

    pub(super) fn index(self) -> usize {
        match self {
            CrossAisle::Front => 0,
            CrossAisle::Back => 1,
        }
    }

    fn opposite(self) -> Self {
        match self {
            CrossAisle::Front => CrossAisle::Back,
            CrossAisle::Back => CrossAisle::Front,
        }
    }
}

/// Predecessor state and the visit that left it, per target state.
type Step = [Option<(CrossAisle, AisleVisit)>; 2];

/// Routes a batch with the combined policy.
///
/// Never longer than [`s_shape`](super::s_shape) or
/// [`largest_gap`](super::largest_gap) on the same batch: both of their
/// routes are paths through the same state graph.
///
/// # Examples
///
/// ```
/// use u_picking::models::Warehouse;
/// use u_picking::occupancy::AisleOccupancy;
/// use u_picking::heuristics::combined;
///
/// let w = Warehouse::new(3, 10.0, 1.0, 2.0).unwrap();
/// let mut occ = AisleOccupancy::empty(&w);
/// for aisle in 0..3 {
///     occ.insert(&w, aisle, 1.0);
/// }
/// // three short returns from the front: 3 · (2 + 2·1) + 12
/// assert!((combined(&w, &occ).distance() - 24.0).abs() < 1e-10);
/// ```
pub fn combined(warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
    let Some((min_aisle, max_aisle)) = occupancy.range() else {
        return RoutePlan::empty();
    };

    let aisles: Vec<(usize, &AisleHeights)> = occupancy.occupied().collect();

    // best[s]: in-aisle time so far with the outbound pass on s
    let mut best = [0.0, f64::INFINITY];
    let mut steps: Vec<Step> = Vec::with_capacity(aisles.len());

    for &(_, heights) in &aisles {
        let mut next = [f64::INFINITY; 2];
        let mut step: Step = [None; 2];

        for from in CrossAisle::BOTH {
            let cost = best[from.index()];
            if cost.is_infinite() {
                continue;
            }
            // Traversal first: on equal cost it is kept.
            let options = [
                (from.opposite(), AisleVisit::Traverse),
                (from, serve(from, heights, warehouse)),
            ];
            for (to, visit) in options {
                let candidate = cost + visit.cost(warehouse);
                if candidate < next[to.index()] {
                    next[to.index()] = candidate;
                    step[to.index()] = Some((from, visit));
                }
            }
        }

        best = next;
        steps.push(step);
    }

    // Backtrack from the front cross-aisle, which is always reachable by
    // serving every aisle from the front.
    let mut side = CrossAisle::Front;
    let mut decisions = Vec::with_capacity(aisles.len());
    for (&(aisle, _), step) in aisles.iter().zip(&steps).rev() {
        let (from, visit) = step[side.index()].expect("reachable state");
        decisions.push(AisleDecision { aisle, visit });
        side = from;
    }
    decisions.reverse();

    RoutePlan::new(
        warehouse,
        cross_aisle_distance(warehouse, min_aisle, max_aisle),
        decisions,
        occupancy.item_count(),
    )
}

/// Serves an aisle without leaving the given cross-aisle.
fn serve(side: CrossAisle, heights: &AisleHeights, warehouse: &Warehouse) -> AisleVisit {
    match side {
        CrossAisle::Front => AisleVisit::from_front(heights),
        CrossAisle::Back => AisleVisit::largest_gap(heights, warehouse),
    }
}
