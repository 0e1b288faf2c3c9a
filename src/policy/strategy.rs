//! Routing strategy trait and one implementation per policy.

use tracing::trace;

use crate::evaluation::{RoutePlan, ServiceTime};
use crate::exact::ratliff_rosenthal;
use crate::heuristics::{combined, combined_plus, largest_gap, s_shape};
use crate::models::{Batch, Warehouse};
use crate::occupancy::AisleOccupancy;

/// A way of routing a picker through the warehouse.
///
/// Implementors only supply [`plan`](RoutingStrategy::plan) on an already
/// extracted occupancy; batch handling and the time addendum are shared.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Batch, Order, Side, Warehouse};
/// use u_picking::occupancy::AisleOccupancy;
/// use u_picking::evaluation::RoutePlan;
/// use u_picking::policy::RoutingStrategy;
///
/// /// S-shape under another name.
/// struct Snake;
///
/// impl RoutingStrategy for Snake {
///     fn name(&self) -> &'static str { "SNAKE" }
///     fn plan(&self, w: &Warehouse, occ: &AisleOccupancy) -> RoutePlan {
///         u_picking::heuristics::s_shape(w, occ)
///     }
/// }
///
/// let w = Warehouse::new(2, 10.0, 1.0, 2.0).unwrap();
/// let mut batch = Batch::new(10.0);
/// batch.add_order(Order::new(1, 0.0, 0.0, vec![
///     w.product(1, 1, Side::Right, 4.0, 1.0).unwrap(),
/// ])).unwrap();
/// // 2 + 2·4 + 2·3
/// assert!((Snake.distance(&w, &batch) - 16.0).abs() < 1e-10);
/// ```
pub trait RoutingStrategy: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    /// Plans a tour through a non-empty occupancy.
    fn plan(&self, warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan;

    /// Extracts the batch's occupancy and plans its tour.
    ///
    /// An empty batch gives [`RoutePlan::empty`].
    ///
    /// # Panics
    ///
    /// Panics if a product lies outside the warehouse.
    fn route(&self, warehouse: &Warehouse, batch: &Batch) -> RoutePlan {
        let occupancy = AisleOccupancy::from_batch(warehouse, batch);
        if occupancy.is_empty() {
            return RoutePlan::empty();
        }
        let plan = self.plan(warehouse, &occupancy);
        trace!(
            policy = self.name(),
            aisles = occupancy.num_occupied(),
            items = occupancy.item_count(),
            distance = plan.distance(),
            "routed batch"
        );
        plan
    }

    /// Travel distance of the batch's tour.
    fn distance(&self, warehouse: &Warehouse, batch: &Batch) -> f64 {
        self.route(warehouse, batch).distance()
    }

    /// Service time of the batch's tour.
    ///
    /// Equals [`distance`](RoutingStrategy::distance) with unit travel speed
    /// and no handling times.
    fn compute_cost(&self, warehouse: &Warehouse, batch: &Batch) -> f64 {
        ServiceTime::of(&self.route(warehouse, batch), warehouse).total()
    }
}

/// S-shape policy, see [`s_shape`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SShape;

/// Largest-gap policy, see [`largest_gap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestGap;

/// Combined policy, see [`combined`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Combined;

/// Combined-plus policy, see [`combined_plus`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedPlus;

/// Optimal policy, see [`ratliff_rosenthal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RatliffRosenthal;

impl RoutingStrategy for SShape {
    fn name(&self) -> &'static str {
        "S_SHAPE"
    }

    fn plan(&self, warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
        s_shape(warehouse, occupancy)
    }
}

impl RoutingStrategy for LargestGap {
    fn name(&self) -> &'static str {
        "LARGEST_GAP"
    }

    fn plan(&self, warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
        largest_gap(warehouse, occupancy)
    }
}

impl RoutingStrategy for Combined {
    fn name(&self) -> &'static str {
        "COMBINED"
    }

    fn plan(&self, warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
        combined(warehouse, occupancy)
    }
}

impl RoutingStrategy for CombinedPlus {
    fn name(&self) -> &'static str {
        "COMBINED_PLUS"
    }

    fn plan(&self, warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
        combined_plus(warehouse, occupancy)
    }
}

impl RoutingStrategy for RatliffRosenthal {
    fn name(&self) -> &'static str {
        "RATLIFF_ROSENTHAL"
    }

    fn plan(&self, warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
        ratliff_rosenthal(warehouse, occupancy)
    }
}
