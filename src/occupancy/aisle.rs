//! Requested heights within a single aisle and the gaps between them.

use serde::{Deserialize, Serialize};

/// Where a gap sits within an aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GapPosition {
    /// Touches the front end of the aisle (height 0).
    Beginning,
    /// Strictly between two requested items.
    Middle,
    /// Touches the back end of the aisle (height `shelf_length`).
    End,
}

/// An unvisited stretch of an aisle between two consecutive points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    /// Lower boundary (an item height, or 0).
    pub lower: f64,
    /// Upper boundary (an item height, or `shelf_length`).
    pub upper: f64,
    /// Position of the gap within the aisle.
    pub position: GapPosition,
}

impl Gap {
    /// Length of the gap.
    pub fn len(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` for a zero-length gap (an item on a sentinel or two
    /// items at the same height).
    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }
}

/// Sorted, deduplicated heights of the items requested in one aisle.
///
/// The aisle's point list is the heights bracketed by the sentinels `0` and
/// `shelf_length`, which stand for the two cross-aisle entries.
///
/// # Examples
///
/// ```
/// use u_picking::occupancy::{AisleHeights, GapPosition};
///
/// let mut aisle = AisleHeights::new(10.0);
/// aisle.insert(7.0);
/// aisle.insert(2.0);
/// aisle.insert(7.0);
/// assert_eq!(aisle.heights(), &[2.0, 7.0]);
/// assert_eq!(aisle.points().collect::<Vec<_>>(), vec![0.0, 2.0, 7.0, 10.0]);
///
/// let gap = aisle.largest_gap().unwrap();
/// assert_eq!(gap.position, GapPosition::Middle);
/// assert_eq!(gap.len(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AisleHeights {
    shelf_length: f64,
    heights: Vec<f64>,
}

impl AisleHeights {
    /// Creates an aisle with no requested items.
    pub fn new(shelf_length: f64) -> Self {
        Self {
            shelf_length,
            heights: Vec::new(),
        }
    }

    /// Inserts a height, keeping the list sorted and free of duplicates.
    pub fn insert(&mut self, height: f64) {
        match self.heights.binary_search_by(|h| h.total_cmp(&height)) {
            Ok(_) => {}
            Err(pos) => self.heights.insert(pos, height),
        }
    }

    /// Requested heights in ascending order.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Returns `true` if no item is requested in this aisle.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Number of distinct requested heights.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Shelf length (the back sentinel).
    pub fn shelf_length(&self) -> f64 {
        self.shelf_length
    }

    /// Height of the item closest to the front cross-aisle.
    pub fn lowest(&self) -> Option<f64> {
        self.heights.first().copied()
    }

    /// Height of the item closest to the back cross-aisle.
    pub fn highest(&self) -> Option<f64> {
        self.heights.last().copied()
    }

    /// The heights bracketed by the `0` and `shelf_length` sentinels.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(0.0)
            .chain(self.heights.iter().copied())
            .chain(std::iter::once(self.shelf_length))
    }

    /// Gaps between consecutive points, from the front end to the back end.
    ///
    /// Empty for an aisle without requested items.
    pub fn gaps(&self) -> impl Iterator<Item = Gap> + '_ {
        let n = if self.is_empty() { 0 } else { self.heights.len() + 1 };
        let points: Vec<f64> = self.points().collect();
        (0..n).map(move |k| Gap {
            lower: points[k],
            upper: points[k + 1],
            position: if k == 0 {
                GapPosition::Beginning
            } else if k + 1 == n {
                GapPosition::End
            } else {
                GapPosition::Middle
            },
        })
    }

    /// The longest gap; the one closest to the front wins ties.
    pub fn largest_gap(&self) -> Option<Gap> {
        self.gaps().fold(None, |best: Option<Gap>, gap| match best {
            Some(b) if gap.len() <= b.len() => Some(b),
            _ => Some(gap),
        })
    }

    /// The longest gap strictly between two requested items.
    ///
    /// `None` when fewer than two distinct heights are requested.
    pub fn largest_interior_gap(&self) -> Option<Gap> {
        self.gaps()
            .filter(|g| g.position == GapPosition::Middle)
            .fold(None, |best: Option<Gap>, gap| match best {
                Some(b) if gap.len() <= b.len() => Some(b),
                _ => Some(gap),
            })
    }
}
