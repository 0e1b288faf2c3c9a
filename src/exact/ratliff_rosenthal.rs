//! Ratliff-Rosenthal optimal routing.
//!
//! # Algorithm
//!
//! The warehouse is seen as a ladder graph: a back and a front vertex per
//! column (aisle, or the depot when it sits between two aisles), vertical
//! edges along the aisles and horizontal edges along the cross-aisles. A
//! shortest tour is a minimum-length connected even-degree subgraph that
//! touches every requested item and the depot.
//!
//! Edges are weighed by time rather than length: walking time at the
//! travel speed, plus the turns each aisle visit makes. With no turn times
//! this is the shortest tour.
//!
//! The dynamic program sweeps the columns left to right. Each step first
//! adds the vertical edges of one aisle (no edge, a traversal, a double
//! traversal, or one of the gap-skipping patterns) and then the horizontal
//! edges to the next column (zero, one or two copies on each cross-aisle).
//! Partial subgraphs are grouped into the seven [`TourShape`] classes, and
//! only the cheapest one per class is kept.
//!
//! # Complexity
//!
//! O(c) over the columns between the leftmost aisle and the rightmost one,
//! depot included; at most 7 · 6 vertical and 7 · 9 horizontal transitions
//! per column.
//!
//! # Reference
//!
//! Ratliff, H.D. & Rosenthal, A.S. (1983). "Order-picking in a rectangular
//! warehouse: a solvable case of the traveling salesman problem",
//! *Operations Research* 31(3), 507-521.

use tracing::trace;

use super::TourShape;
use crate::distance::{tour_columns, Column};
use crate::evaluation::{AisleDecision, AisleVisit, RoutePlan};
use crate::models::Warehouse;
use crate::occupancy::AisleOccupancy;

/// Predecessors of one column, per class reached.
#[derive(Debug, Clone)]
struct ColumnTrail {
    /// Class before the vertical step and the aisle visit made.
    vertical: [Option<(TourShape, Option<AisleVisit>)>; 7],
    /// Class before the horizontal step and the copies `(back, front)` used.
    horizontal: [Option<(TourShape, u8, u8)>; 7],
}

/// Computes a quickest tour through all requested items.
///
/// The result is a lower bound for every other policy on the same batch,
/// both in distance when no turn times are set and in service time.
///
/// # Examples
///
/// ```
/// use u_picking::models::Warehouse;
/// use u_picking::occupancy::AisleOccupancy;
/// use u_picking::exact::ratliff_rosenthal;
///
/// let w = Warehouse::new(3, 10.0, 1.0, 2.0).unwrap();
/// let mut occ = AisleOccupancy::empty(&w);
/// occ.insert(&w, 0, 3.0);
/// occ.insert(&w, 1, 8.0);
/// occ.insert(&w, 2, 2.0);
///
/// let plan = ratliff_rosenthal(&w, &occ);
/// assert!((plan.distance() - 42.0).abs() < 1e-10);
/// ```
pub fn ratliff_rosenthal(warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
    let columns = tour_columns(warehouse, occupancy);
    if columns.is_empty() {
        return RoutePlan::empty();
    }

    let pitch = warehouse.pitch();
    let speed = warehouse.travel_speed();
    let mut cost = [f64::INFINITY; 7];
    cost[TourShape::Empty.index()] = 0.0;
    let mut trail: Vec<ColumnTrail> = Vec::with_capacity(columns.len());

    for (k, column) in columns.iter().enumerate() {
        let visits = candidate_visits(column, occupancy);

        let mut vertical_cost = [f64::INFINITY; 7];
        let mut vertical = [None; 7];
        for shape in TourShape::ALL {
            let base = cost[shape.index()];
            if base.is_infinite() {
                continue;
            }
            for visit in &visits {
                let Some(next) = shape.through_aisle(visit.as_ref()) else {
                    continue;
                };
                let candidate = base + visit.map_or(0.0, |v| v.cost(warehouse));
                if candidate < vertical_cost[next.index()] {
                    vertical_cost[next.index()] = candidate;
                    vertical[next.index()] = Some((shape, *visit));
                }
            }
        }

        // Past the last column nothing may be carried.
        let span = columns
            .get(k + 1)
            .map(|next| (next.position - column.position) * pitch / speed);
        let copies: &[u8] = if span.is_some() { &[0, 1, 2] } else { &[0] };

        let mut horizontal_cost = [f64::INFINITY; 7];
        let mut horizontal = [None; 7];
        for shape in TourShape::ALL {
            let base = vertical_cost[shape.index()];
            if base.is_infinite() {
                continue;
            }
            for &back in copies {
                for &front in copies {
                    let Some(next) = shape.across(back, front, column.depot) else {
                        continue;
                    };
                    let candidate = base + f64::from(back + front) * span.unwrap_or(0.0);
                    if candidate < horizontal_cost[next.index()] {
                        horizontal_cost[next.index()] = candidate;
                        horizontal[next.index()] = Some((shape, back, front));
                    }
                }
            }
        }

        cost = horizontal_cost;
        trail.push(ColumnTrail {
            vertical,
            horizontal,
        });
    }

    let time = cost[TourShape::Closed.index()];
    trace!(columns = columns.len(), time, "ratliff-rosenthal tour");

    // Backtrack from the closed tour.
    let mut shape = TourShape::Closed;
    let mut lateral = 0.0;
    let mut decisions = Vec::new();
    for (k, (column, steps)) in columns.iter().zip(&trail).enumerate().rev() {
        let (before, back, front) = steps.horizontal[shape.index()].expect("reachable class");
        if let Some(next) = columns.get(k + 1) {
            lateral += f64::from(back + front) * (next.position - column.position) * pitch;
        }
        shape = before;

        let (before, visit) = steps.vertical[shape.index()].expect("reachable class");
        if let (Some(aisle), Some(visit)) = (column.aisle, visit) {
            decisions.push(AisleDecision { aisle, visit });
        }
        shape = before;
    }
    debug_assert_eq!(shape, TourShape::Empty);
    decisions.reverse();

    RoutePlan::new(warehouse, lateral, decisions, occupancy.item_count())
}

/// Vertical patterns allowed in a column; `None` leaves the aisle unentered.
///
/// An aisle with requested items must be entered. Skipping the largest gap
/// between two items is the only both-ends pattern worth trying: any other
/// interior gap costs more with the same edges.
fn candidate_visits(column: &Column, occupancy: &AisleOccupancy) -> Vec<Option<AisleVisit>> {
    let Some(aisle) = column.aisle else {
        return vec![None];
    };

    let heights = occupancy.slot(aisle);
    if heights.is_empty() {
        return vec![None, Some(AisleVisit::Traverse), Some(AisleVisit::Loop)];
    }

    let mut visits = vec![
        Some(AisleVisit::Traverse),
        Some(AisleVisit::Loop),
        Some(AisleVisit::from_front(heights)),
        Some(AisleVisit::from_back(heights)),
    ];
    if let Some(both) = AisleVisit::from_both_ends(heights) {
        visits.push(Some(both));
    }
    visits
}
