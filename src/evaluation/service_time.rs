//! Conversion of a route plan into total service time.

use super::RoutePlan;
use crate::models::Warehouse;

/// Breakdown of the time a picker spends on one tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceTime {
    /// Walking time (distance / travel speed).
    pub travel: f64,
    /// Time spent taking items from the shelves.
    pub picking: f64,
    /// Time spent turning into and out of aisles and inside them.
    pub turning: f64,
    /// Fixed time at the depot.
    pub depot: f64,
}

impl ServiceTime {
    /// Computes the time breakdown for a plan.
    ///
    /// The addendum does not depend on which policy produced the plan. An
    /// empty plan takes no time at all, including no depot time.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_picking::models::WarehouseConfig;
    /// use u_picking::evaluation::{AisleDecision, AisleVisit, RoutePlan, ServiceTime};
    ///
    /// let w = WarehouseConfig {
    ///     number_of_aisles: 1,
    ///     travel_speed: 2.0,
    ///     picking_time_per_item: 5.0,
    ///     inside_turn_time: 1.0,
    ///     outside_turn_time: 0.5,
    ///     depot_time: 30.0,
    ///     ..WarehouseConfig::default()
    /// }
    /// .build()
    /// .unwrap();
    ///
    /// let plan = RoutePlan::new(
    ///     &w,
    ///     0.0,
    ///     vec![AisleDecision { aisle: 0, visit: AisleVisit::FromFront { depth: 4.0 } }],
    ///     3,
    /// );
    /// let time = ServiceTime::of(&plan, &w);
    /// assert_eq!(time.travel, 5.0);   // (2 + 2·4) / 2
    /// assert_eq!(time.picking, 15.0);
    /// assert_eq!(time.turning, 2.0);  // 2 outside + 1 inside
    /// assert_eq!(time.total(), 52.0);
    /// ```
    pub fn of(plan: &RoutePlan, warehouse: &Warehouse) -> Self {
        if plan.item_count() == 0 && plan.decisions().is_empty() {
            return Self {
                travel: 0.0,
                picking: 0.0,
                turning: 0.0,
                depot: 0.0,
            };
        }

        Self {
            travel: plan.distance() / warehouse.travel_speed(),
            picking: plan.item_count() as f64 * warehouse.picking_time_per_item(),
            turning: plan.outside_turns() as f64 * warehouse.outside_turn_time()
                + plan.inside_turns() as f64 * warehouse.inside_turn_time(),
            depot: warehouse.depot_time(),
        }
    }

    /// Sum of all components.
    pub fn total(&self) -> f64 {
        self.travel + self.picking + self.turning + self.depot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{AisleDecision, AisleVisit};
    use crate::models::WarehouseConfig;

    #[test]
    fn test_defaults_equal_distance() {
        let w = WarehouseConfig::default().build().expect("valid");
        let plan = RoutePlan::new(
            &w,
            6.0,
            vec![
                AisleDecision {
                    aisle: 0,
                    visit: AisleVisit::Traverse,
                },
                AisleDecision {
                    aisle: 1,
                    visit: AisleVisit::Traverse,
                },
            ],
            2,
        );
        let time = ServiceTime::of(&plan, &w);
        assert!((time.total() - plan.distance()).abs() < 1e-10);
    }

    #[test]
    fn test_empty_plan_takes_no_time() {
        let w = WarehouseConfig {
            depot_time: 10.0,
            ..WarehouseConfig::default()
        }
        .build()
        .expect("valid");
        assert_eq!(ServiceTime::of(&RoutePlan::empty(), &w).total(), 0.0);
    }

    #[test]
    fn test_turn_times() {
        let w = WarehouseConfig {
            outside_turn_time: 1.0,
            inside_turn_time: 3.0,
            ..WarehouseConfig::default()
        }
        .build()
        .expect("valid");
        let plan = RoutePlan::new(
            &w,
            0.0,
            vec![AisleDecision {
                aisle: 0,
                visit: AisleVisit::FromBothEnds {
                    lower: 2.0,
                    upper: 8.0,
                },
            }],
            2,
        );
        let time = ServiceTime::of(&plan, &w);
        // 4 outside · 1 + 2 inside · 3
        assert!((time.turning - 10.0).abs() < 1e-10);
    }
}
