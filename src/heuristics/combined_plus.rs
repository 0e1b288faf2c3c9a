//! Combined-plus routing: two passes, each free to use either cross-aisle.
//!
//! # Algorithm
//!
//! The tour is split into an outbound pass running left to right and a
//! return pass running right to left. Both passes span every aisle from the
//! leftmost one needed to the rightmost one, and each of them walks either
//! the front or the back cross-aisle between two neighbouring aisles. Going
//! from one aisle to the next the state is the pair (outbound side, return
//! side), four states in all.
//!
//! A pass switching sides inside an aisle traverses it; both switching is a
//! double traversal. When neither switches, the aisle is served from the
//! cross-aisles the passes are on: from the front, from the back, or from
//! both around the gap worth skipping. The quickest path over the states is
//! found aisle by aisle, each visit weighed by its time in the aisle, and
//! the predecessor chain from the cheaper closed state gives one decision
//! per entered aisle.
//!
//! The tour starts and ends with both passes on the same side, the depot's
//! front node has to be touched, and empty aisles may be crossed to change
//! sides. Every combined route is a path through this graph, so the result
//! is never longer.
//!
//! # Complexity
//!
//! O(c) over the columns between the leftmost aisle and the rightmost one,
//! depot included; 16 transitions each.
//!
//! # Reference
//!
//! Roodbergen, K.J. & De Koster, R. (2001). "Routing methods for warehouses
//! with multiple cross aisles", *International Journal of Production
//! Research* 39(9), 1865-1883.

use super::combined::CrossAisle;
use crate::distance::{cross_aisle_distance, tour_columns, Column};
use crate::evaluation::{AisleDecision, AisleVisit, RoutePlan};
use crate::models::Warehouse;
use crate::occupancy::{AisleHeights, AisleOccupancy};

/// Cross-aisles used by the outbound and the return pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Passes {
    outbound: CrossAisle,
    inbound: CrossAisle,
}

impl Passes {
    const ALL: [Passes; 4] = [
        Passes::new(CrossAisle::Front, CrossAisle::Front),
        Passes::new(CrossAisle::Front, CrossAisle::Back),
        Passes::new(CrossAisle::Back, CrossAisle::Front),
        Passes::new(CrossAisle::Back, CrossAisle::Back),
    ];

    const fn new(outbound: CrossAisle, inbound: CrossAisle) -> Self {
        Self { outbound, inbound }
    }

    fn index(self) -> usize {
        self.outbound.index() * 2 + self.inbound.index()
    }

    /// Both passes on the same side: the tour can turn around here.
    fn is_closed(self) -> bool {
        self.outbound == self.inbound
    }

    fn touches_front(self) -> bool {
        self.outbound == CrossAisle::Front || self.inbound == CrossAisle::Front
    }
}

/// Predecessor state and the visit made, per target state.
type Step = [Option<(Passes, Option<AisleVisit>)>; 4];

/// Routes a batch with the combined-plus policy.
///
/// # Examples
///
/// ```
/// use u_picking::models::{DepotPlacement, Warehouse};
/// use u_picking::occupancy::AisleOccupancy;
/// use u_picking::heuristics::{combined, combined_plus};
///
/// let w = Warehouse::new(4, 10.0, 1.0, 2.0)
///     .unwrap()
///     .with_depot(DepotPlacement::Center);
/// let mut occ = AisleOccupancy::empty(&w);
/// occ.insert(&w, 0, 8.0);
/// occ.insert(&w, 3, 8.0);
///
/// let plus = combined_plus(&w, &occ).distance();
/// assert!(plus <= combined(&w, &occ).distance() + 1e-9);
/// ```
pub fn combined_plus(warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
    let Some((min_aisle, max_aisle)) = occupancy.range() else {
        return RoutePlan::empty();
    };

    let columns = tour_columns(warehouse, occupancy);

    let mut best = [f64::INFINITY; 4];
    for start in Passes::ALL.into_iter().filter(|p| p.is_closed()) {
        best[start.index()] = 0.0;
    }
    let mut steps: Vec<Step> = Vec::with_capacity(columns.len());

    for column in &columns {
        let heights = column.aisle.map(|aisle| occupancy.slot(aisle));
        let mut next = [f64::INFINITY; 4];
        let mut step: Step = [None; 4];

        for from in Passes::ALL {
            let cost = best[from.index()];
            if cost.is_infinite() {
                continue;
            }
            for to in Passes::ALL {
                let Some(visit) = transition(column, heights, from, to, warehouse) else {
                    continue;
                };
                let candidate = cost + visit.map_or(0.0, |v| v.cost(warehouse));
                if candidate < next[to.index()] {
                    next[to.index()] = candidate;
                    step[to.index()] = Some((from, visit));
                }
            }
        }

        best = next;
        steps.push(step);
    }

    let mut state = Passes::ALL
        .into_iter()
        .filter(|p| p.is_closed())
        .fold(None, |acc: Option<Passes>, p| match acc {
            Some(a) if best[a.index()] <= best[p.index()] => Some(a),
            _ => Some(p),
        })
        .expect("closed states exist");

    let mut decisions = Vec::new();
    for (column, step) in columns.iter().zip(&steps).rev() {
        let (from, visit) = step[state.index()].expect("reachable state");
        if let (Some(aisle), Some(visit)) = (column.aisle, visit) {
            decisions.push(AisleDecision { aisle, visit });
        }
        state = from;
    }
    decisions.reverse();

    RoutePlan::new(
        warehouse,
        cross_aisle_distance(warehouse, min_aisle, max_aisle),
        decisions,
        occupancy.item_count(),
    )
}

/// The aisle visit moving the passes from `from` (left of the column) to
/// `to` (right of it).
///
/// `None` if the move is not allowed; `Some(None)` if it leaves the aisle
/// unentered.
fn transition(
    column: &Column,
    heights: Option<&AisleHeights>,
    from: Passes,
    to: Passes,
    warehouse: &Warehouse,
) -> Option<Option<AisleVisit>> {
    if column.depot && !(from.touches_front() || to.touches_front()) {
        return None;
    }

    let Some(heights) = heights else {
        return (from == to).then_some(None);
    };

    let switches =
        usize::from(from.outbound != to.outbound) + usize::from(from.inbound != to.inbound);
    match switches {
        1 => Some(Some(AisleVisit::Traverse)),
        2 => Some(Some(AisleVisit::Loop)),
        _ if heights.is_empty() => Some(None),
        _ => Some(Some(serve(from, heights, warehouse))),
    }
}

/// Serves an aisle from the cross-aisles the two passes are on.
fn serve(passes: Passes, heights: &AisleHeights, warehouse: &Warehouse) -> AisleVisit {
    match (passes.outbound, passes.inbound) {
        (CrossAisle::Front, CrossAisle::Front) => AisleVisit::from_front(heights),
        (CrossAisle::Back, CrossAisle::Back) => AisleVisit::from_back(heights),
        _ => AisleVisit::largest_gap(heights, warehouse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::ServiceTime;
    use crate::heuristics::combined;
    use crate::models::{DepotPlacement, WarehouseConfig};

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
        assert_eq!(combined_plus(&w, &AisleOccupancy::empty(&w)).distance(), 0.0);
    }

    #[test]
    fn test_reference_layout() {
        let w = warehouse(3);
        let occ = occupancy(&w, &[(0, 3.0), (1, 8.0), (2, 2.0)]);
        let plan = combined_plus(&w, &occ);
        assert!((plan.distance() - 42.0).abs() < 1e-10);
        assert!((plan.cross_aisle() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_item_round_trip() {
        let w = warehouse(5);
        let occ = occupancy(&w, &[(2, 3.0)]);
        let plan = combined_plus(&w, &occ);
        assert_eq!(plan.decision(2), Some(&AisleVisit::FromFront { depth: 3.0 }));
        // 2 + 6 + 2 · 3 · 2
        assert!((plan.distance() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_depot_between_aisles() {
        let w = warehouse(2).with_depot(DepotPlacement::Center);
        let occ = occupancy(&w, &[(0, 5.0), (1, 5.0)]);
        let plan = combined_plus(&w, &occ);
        // two front returns of 12 plus 2 · 3 · 1
        assert!((plan.distance() - 30.0).abs() < 1e-10);
        assert!((combined(&w, &occ).distance() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_not_worse_than_combined() {
        let w = warehouse(6);
        let layouts: [&[(usize, f64)]; 4] = [
            &[(0, 1.0), (1, 1.0), (1, 9.0), (2, 9.0)],
            &[(1, 2.0), (1, 8.0), (3, 5.0), (5, 0.5)],
            &[(0, 0.0), (2, 10.0), (4, 4.0), (5, 6.0)],
            &[(0, 9.5), (5, 9.5)],
        ];
        for depot in [DepotPlacement::Corner, DepotPlacement::Center] {
            let w = w.clone().with_depot(depot);
            for items in layouts {
                let occ = occupancy(&w, items);
                let plan = combined_plus(&w, &occ);
                assert!(plan.distance() <= combined(&w, &occ).distance() + 1e-9);
            }
        }
    }

    #[test]
    fn test_turn_around_time_never_drops_with_more_items() {
        let w = WarehouseConfig {
            number_of_aisles: 2,
            inside_turn_time: 100.0,
            ..WarehouseConfig::default()
        }
        .build()
        .expect("valid");
        let base = occupancy(&w, &[(0, 4.9), (1, 4.9)]);
        let more = occupancy(&w, &[(0, 4.9), (1, 4.9), (1, 5.2)]);
        let time = |occ: &AisleOccupancy| ServiceTime::of(&combined_plus(&w, occ), &w).total();
        assert!((time(&base) - 30.0).abs() < 1e-10);
        assert!(time(&base) <= time(&more) + 1e-9);
    }

    #[test]
    fn test_decisions_explain_distance() {
        let w = warehouse(4);
        let occ = occupancy(&w, &[(0, 1.0), (1, 1.0), (1, 9.0), (3, 9.0)]);
        let plan = combined_plus(&w, &occ);
        let in_aisles: f64 = plan.decisions().iter().map(|d| d.visit.distance(&w)).sum();
        assert!((plan.distance() - plan.cross_aisle() - in_aisles).abs() < 1e-10);
        assert!(plan.decisions().windows(2).all(|p| p[0].aisle < p[1].aisle));
        for aisle in [0, 1, 3] {
            assert!(plan.decision(aisle).is_some());
        }
    }
}
