//! Policy identifiers and batch-cost entry points.

use std::fmt;
use std::str::FromStr;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::strategy::{
    Combined, CombinedPlus, LargestGap, RatliffRosenthal, RoutingStrategy, SShape,
};
use crate::error::ModelError;
use crate::evaluation::RoutePlan;
use crate::models::{Batch, Warehouse};
use crate::occupancy::AisleOccupancy;

/// The routing policies a batch can be costed with.
///
/// # Examples
///
/// ```
/// use u_picking::policy::RoutingPolicy;
///
/// let policy: RoutingPolicy = "combined-plus".parse().unwrap();
/// assert_eq!(policy, RoutingPolicy::CombinedPlus);
/// assert_eq!(policy.to_string(), "COMBINED_PLUS");
/// assert!("ZIGZAG".parse::<RoutingPolicy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingPolicy {
    /// Traverse every occupied aisle.
    SShape,
    /// Traverse the outer aisles, skip the largest gap in between.
    LargestGap,
    /// Traverse or return per aisle.
    Combined,
    /// Combined with independent outbound and return passes.
    CombinedPlus,
    /// Optimal tour: shortest, or quickest once turn times are set.
    RatliffRosenthal,
}

impl RoutingPolicy {
    /// Every policy, heuristics first.
    pub const ALL: [RoutingPolicy; 5] = [
        RoutingPolicy::SShape,
        RoutingPolicy::LargestGap,
        RoutingPolicy::Combined,
        RoutingPolicy::CombinedPlus,
        RoutingPolicy::RatliffRosenthal,
    ];

    fn strategy(self) -> &'static dyn RoutingStrategy {
        match self {
            RoutingPolicy::SShape => &SShape,
            RoutingPolicy::LargestGap => &LargestGap,
            RoutingPolicy::Combined => &Combined,
            RoutingPolicy::CombinedPlus => &CombinedPlus,
            RoutingPolicy::RatliffRosenthal => &RatliffRosenthal,
        }
    }
}

impl RoutingStrategy for RoutingPolicy {
    fn name(&self) -> &'static str {
        self.strategy().name()
    }

    fn plan(&self, warehouse: &Warehouse, occupancy: &AisleOccupancy) -> RoutePlan {
        self.strategy().plan(warehouse, occupancy)
    }
}

impl fmt::Display for RoutingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutingPolicy {
    type Err = ModelError;

    /// Parses a policy identifier, ignoring case and `-`/`_` differences.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace('-', "_");
        RoutingPolicy::ALL
            .into_iter()
            .find(|policy| policy.name() == key)
            .ok_or_else(|| ModelError::UnknownPolicy(s.to_string()))
    }
}

/// Service time of one batch under the given policy.
///
/// With unit travel speed and no handling times this is the travel
/// distance; an empty batch costs nothing.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Batch, Order, Side, Warehouse};
/// use u_picking::policy::{compute_cost, RoutingPolicy};
///
/// let w = Warehouse::new(3, 10.0, 1.0, 2.0).unwrap();
/// let mut batch = Batch::new(50.0);
/// batch.add_order(Order::new(7, 0.0, 0.0, vec![
///     w.product(1, 0, Side::Left, 3.0, 2.0).unwrap(),
///     w.product(2, 1, Side::Right, 8.0, 2.0).unwrap(),
///     w.product(3, 2, Side::Left, 2.0, 2.0).unwrap(),
/// ])).unwrap();
///
/// for policy in RoutingPolicy::ALL {
///     assert!((compute_cost(policy, &w, &batch) - 42.0).abs() < 1e-10);
/// }
/// ```
pub fn compute_cost(policy: RoutingPolicy, warehouse: &Warehouse, batch: &Batch) -> f64 {
    policy.compute_cost(warehouse, batch)
}

/// Service time of every batch, in input order, computed in parallel.
///
/// Results equal calling
/// [`compute_cost`](RoutingStrategy::compute_cost) on each batch in turn.
pub fn evaluate_batches<S>(strategy: &S, warehouse: &Warehouse, batches: &[Batch]) -> Vec<f64>
where
    S: RoutingStrategy + ?Sized,
{
    debug!(
        policy = strategy.name(),
        batches = batches.len(),
        "evaluating candidate batches"
    );
    batches
        .par_iter()
        .map(|batch| strategy.compute_cost(warehouse, batch))
        .collect()
}
