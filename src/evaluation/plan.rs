//! Route plans and per-aisle visit patterns.

use crate::models::Warehouse;
use crate::occupancy::{AisleHeights, Gap, GapPosition};

/// How a tour covers one aisle.
///
/// Heights are measured from the front cross-aisle, as for products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AisleVisit {
    /// Walked once from one cross-aisle to the other.
    Traverse,
    /// Walked twice from one cross-aisle to the other (up and back down).
    Loop,
    /// Entered from the front up to `depth` and left the same way.
    FromFront { depth: f64 },
    /// Entered from the back down to `depth` and left the same way.
    FromBack { depth: f64 },
    /// Entered from the front up to `lower` and from the back down to
    /// `upper`; the stretch in between is skipped.
    FromBothEnds { lower: f64, upper: f64 },
}

impl AisleVisit {
    /// Entered from the front up to the highest requested item.
    ///
    /// # Panics
    ///
    /// Panics on an aisle without requested items.
    pub fn from_front(aisle: &AisleHeights) -> Self {
        AisleVisit::FromFront {
            depth: aisle.highest().expect("occupied aisle"),
        }
    }

    /// Entered from the back down to the lowest requested item.
    ///
    /// # Panics
    ///
    /// Panics on an aisle without requested items.
    pub fn from_back(aisle: &AisleHeights) -> Self {
        AisleVisit::FromBack {
            depth: aisle.lowest().expect("occupied aisle"),
        }
    }

    /// Entered from both ends around the largest gap between two items.
    ///
    /// `None` when the aisle has fewer than two distinct heights.
    pub fn from_both_ends(aisle: &AisleHeights) -> Option<Self> {
        aisle.largest_interior_gap().map(Self::skipping)
    }

    /// The visit that leaves out the given gap.
    pub fn skipping(gap: Gap) -> Self {
        match gap.position {
            GapPosition::Beginning => AisleVisit::FromBack { depth: gap.upper },
            GapPosition::End => AisleVisit::FromFront { depth: gap.lower },
            GapPosition::Middle => AisleVisit::FromBothEnds {
                lower: gap.lower,
                upper: gap.upper,
            },
        }
    }

    /// The quickest visit that skips one gap while entering from both
    /// cross-aisles as needed.
    ///
    /// A gap touching an aisle end needs one entry; an interior gap needs
    /// two, costing one extra aisle width and one more turn-around. Visits
    /// are compared by [`cost`](AisleVisit::cost). Candidates are scanned
    /// from the front end and the first quickest one wins, so between
    /// equally long gaps of the same kind the one closer to height 0 is
    /// skipped.
    ///
    /// # Panics
    ///
    /// Panics on an aisle without requested items.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_picking::models::Warehouse;
    /// use u_picking::occupancy::AisleHeights;
    /// use u_picking::evaluation::AisleVisit;
    ///
    /// let w = Warehouse::new(3, 10.0, 1.0, 2.0).unwrap();
    /// let mut aisle = AisleHeights::new(10.0);
    /// aisle.insert(1.0);
    /// aisle.insert(9.0);
    /// // interior gap of 8 beats the two boundary gaps of 1
    /// let visit = AisleVisit::largest_gap(&aisle, &w);
    /// assert_eq!(visit, AisleVisit::FromBothEnds { lower: 1.0, upper: 9.0 });
    /// assert_eq!(visit.distance(&w), 8.0);
    /// ```
    pub fn largest_gap(aisle: &AisleHeights, warehouse: &Warehouse) -> Self {
        aisle
            .gaps()
            .map(Self::skipping)
            .fold(None, |best: Option<(Self, f64)>, visit| {
                let t = visit.cost(warehouse);
                match best {
                    Some((_, best_t)) if t >= best_t => best,
                    _ => Some((visit, t)),
                }
            })
            .map(|(visit, _)| visit)
            .expect("occupied aisle")
    }

    /// Walking distance inside the aisle, including the half aisle width
    /// between each cross-aisle centre line and the first shelf metre.
    pub fn distance(&self, warehouse: &Warehouse) -> f64 {
        let length = warehouse.shelf_length();
        let width = warehouse.aisle_width();
        match *self {
            AisleVisit::Traverse => length + width,
            AisleVisit::Loop => 2.0 * (length + width),
            AisleVisit::FromFront { depth } => width + 2.0 * depth,
            AisleVisit::FromBack { depth } => width + 2.0 * (length - depth),
            AisleVisit::FromBothEnds { lower, upper } => {
                2.0 * width + 2.0 * (length - (upper - lower))
            }
        }
    }

    /// Time spent in the aisle: the walk at travel speed plus every turn.
    ///
    /// Routing policies that choose between visits compare this, so that a
    /// shorter walk with more turns is not preferred when it takes longer.
    pub fn cost(&self, warehouse: &Warehouse) -> f64 {
        self.distance(warehouse) / warehouse.travel_speed()
            + self.outside_turns() as f64 * warehouse.outside_turn_time()
            + self.inside_turns() as f64 * warehouse.inside_turn_time()
    }

    /// The stretch of aisle this visit leaves out, if any.
    pub fn skipped_gap(&self, shelf_length: f64) -> Option<Gap> {
        match *self {
            AisleVisit::Traverse | AisleVisit::Loop => None,
            AisleVisit::FromFront { depth } => Some(Gap {
                lower: depth,
                upper: shelf_length,
                position: GapPosition::End,
            }),
            AisleVisit::FromBack { depth } => Some(Gap {
                lower: 0.0,
                upper: depth,
                position: GapPosition::Beginning,
            }),
            AisleVisit::FromBothEnds { lower, upper } => Some(Gap {
                lower,
                upper,
                position: GapPosition::Middle,
            }),
        }
    }

    /// Returns `true` if the picker leaves the aisle on the other
    /// cross-aisle.
    pub fn crosses(&self) -> bool {
        matches!(self, AisleVisit::Traverse)
    }

    /// Number of turns between the aisle and a cross-aisle.
    pub fn outside_turns(&self) -> usize {
        match self {
            AisleVisit::Traverse | AisleVisit::FromFront { .. } | AisleVisit::FromBack { .. } => 2,
            AisleVisit::Loop | AisleVisit::FromBothEnds { .. } => 4,
        }
    }

    /// Number of times the picker turns around inside the aisle.
    pub fn inside_turns(&self) -> usize {
        match self {
            AisleVisit::Traverse | AisleVisit::Loop => 0,
            AisleVisit::FromFront { .. } | AisleVisit::FromBack { .. } => 1,
            AisleVisit::FromBothEnds { .. } => 2,
        }
    }
}

/// The visit chosen for one aisle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisleDecision {
    /// Aisle index.
    pub aisle: usize,
    /// How the aisle is covered.
    pub visit: AisleVisit,
}

/// Result of routing one batch: total distance and the path decisions.
///
/// Aisles without a decision are not entered. The decisions are what a
/// drawing layer needs to reproduce the path; batching heuristics usually
/// only read [`distance`](RoutePlan::distance).
///
/// # Examples
///
/// ```
/// use u_picking::models::Warehouse;
/// use u_picking::evaluation::{AisleDecision, AisleVisit, RoutePlan};
///
/// let w = Warehouse::new(2, 10.0, 1.0, 2.0).unwrap();
/// let plan = RoutePlan::new(
///     &w,
///     6.0,
///     vec![
///         AisleDecision { aisle: 0, visit: AisleVisit::Traverse },
///         AisleDecision { aisle: 1, visit: AisleVisit::Traverse },
///     ],
///     4,
/// );
/// assert_eq!(plan.distance(), 30.0);
/// assert_eq!(plan.outside_turns(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    distance: f64,
    cross_aisle: f64,
    decisions: Vec<AisleDecision>,
    item_count: usize,
}

impl RoutePlan {
    /// Builds a plan; the distance is the lateral travel plus every
    /// decision's in-aisle distance.
    pub fn new(
        warehouse: &Warehouse,
        cross_aisle: f64,
        decisions: Vec<AisleDecision>,
        item_count: usize,
    ) -> Self {
        let in_aisles: f64 = decisions.iter().map(|d| d.visit.distance(warehouse)).sum();
        Self {
            distance: cross_aisle + in_aisles,
            cross_aisle,
            decisions,
            item_count,
        }
    }

    /// The plan for a batch with nothing to pick.
    pub fn empty() -> Self {
        Self {
            distance: 0.0,
            cross_aisle: 0.0,
            decisions: Vec::new(),
            item_count: 0,
        }
    }

    /// Total travel distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Distance walked along the cross-aisles.
    pub fn cross_aisle(&self) -> f64 {
        self.cross_aisle
    }

    /// Per-aisle decisions in ascending aisle order.
    pub fn decisions(&self) -> &[AisleDecision] {
        &self.decisions
    }

    /// Decision for the given aisle, if it is entered.
    pub fn decision(&self, aisle: usize) -> Option<&AisleVisit> {
        self.decisions
            .iter()
            .find(|d| d.aisle == aisle)
            .map(|d| &d.visit)
    }

    /// Number of items picked on this route.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Total turns between aisles and cross-aisles.
    pub fn outside_turns(&self) -> usize {
        self.decisions.iter().map(|d| d.visit.outside_turns()).sum()
    }

    /// Total turn-arounds inside aisles.
    pub fn inside_turns(&self) -> usize {
        self.decisions.iter().map(|d| d.visit.inside_turns()).sum()
    }
}
