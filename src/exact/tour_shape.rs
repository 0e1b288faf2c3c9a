//! Equivalence classes of partial tour subgraphs.
//!
//! Left of a cut through the cross-aisles, a partial tour touches at most
//! two vertices on the cut: the back end `b` and the front end `f`. What
//! matters for completing it is the parity of their degrees and how the
//! edges seen so far connect them. Seven classes cover every completable
//! case, written as (degree of `b`, degree of `f`, components):
//!
//! | class        | `b` | `f` | components |
//! |--------------|-----|-----|------------|
//! | `Empty`      | 0   | 0   | 0          |
//! | `OddOdd`     | odd | odd | 1          |
//! | `BackOnly`   | even| 0   | 1          |
//! | `FrontOnly`  | 0   | even| 1          |
//! | `EvenJoined` | even| even| 1          |
//! | `EvenSplit`  | even| even| 2          |
//! | `Closed`     | 0   | 0   | 1          |
//!
//! Transitions are computed on a small explicit frontier (degree class and
//! component label per end) and mapped back to a class, which keeps the
//! tables out of the code.

use crate::evaluation::AisleVisit;

/// Class of a partial tour at a cut between two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TourShape {
    /// Nothing collected yet.
    Empty,
    /// Both ends odd, one component.
    OddOdd,
    /// Only the back end carries edges.
    BackOnly,
    /// Only the front end carries edges.
    FrontOnly,
    /// Both ends even, one component.
    EvenJoined,
    /// Both ends even, each in its own component.
    EvenSplit,
    /// A single closed component already left behind.
    Closed,
}

impl TourShape {
    /// Every class, in table order.
    pub const ALL: [TourShape; 7] = [
        TourShape::Empty,
        TourShape::OddOdd,
        TourShape::BackOnly,
        TourShape::FrontOnly,
        TourShape::EvenJoined,
        TourShape::EvenSplit,
        TourShape::Closed,
    ];

    /// Position in [`TourShape::ALL`].
    pub fn index(self) -> usize {
        match self {
            TourShape::Empty => 0,
            TourShape::OddOdd => 1,
            TourShape::BackOnly => 2,
            TourShape::FrontOnly => 3,
            TourShape::EvenJoined => 4,
            TourShape::EvenSplit => 5,
            TourShape::Closed => 6,
        }
    }

    /// Class after adding the vertical edges of one aisle.
    ///
    /// `None` as visit means the aisle is not entered. Returns `None` when
    /// the result cannot be completed into a tour.
    pub fn through_aisle(self, visit: Option<&AisleVisit>) -> Option<TourShape> {
        let edges = Edges::of(visit);
        let Some(mut frontier) = self.frontier() else {
            return edges.is_none().then_some(TourShape::Closed);
        };

        frontier.back = frontier.back.extend(edges.back, FRESH_BACK);
        frontier.front = frontier.front.extend(edges.front, FRESH_FRONT);
        if edges.links {
            frontier.link();
        }
        frontier.shape()
    }

    /// Class after leaving the column with `back` and `front` copies of the
    /// cross-aisle edges to the next column (0, 1 or 2 each).
    ///
    /// Every vertex left behind must end with even degree; at the depot the
    /// front vertex must also be touched. A component may only be left
    /// behind when it is the whole tour.
    pub fn across(self, back: u8, front: u8, depot: bool) -> Option<TourShape> {
        let Some(frontier) = self.frontier() else {
            return (back == 0 && front == 0 && !depot).then_some(TourShape::Closed);
        };

        let back_final = frontier.back.degree.plus(back);
        let front_final = frontier.front.degree.plus(front);
        if back_final == Degree::Odd || front_final == Degree::Odd {
            return None;
        }
        if depot && front_final == Degree::Zero {
            return None;
        }

        let next = Frontier {
            back: frontier.back.carry(back, FRESH_BACK),
            front: frontier.front.carry(front, FRESH_FRONT),
        };

        let dropped = frontier
            .components()
            .into_iter()
            .flatten()
            .any(|label| !next.contains(label));
        if dropped {
            let whole = frontier.component_count() == 1 && next.component_count() == 0;
            return whole.then_some(TourShape::Closed);
        }
        next.shape()
    }

    fn frontier(self) -> Option<Frontier> {
        let none = End::NONE;
        let even = |label| End {
            degree: Degree::Even,
            component: Some(label),
        };
        let frontier = match self {
            TourShape::Empty => Frontier {
                back: none,
                front: none,
            },
            TourShape::OddOdd => {
                let odd = End {
                    degree: Degree::Odd,
                    component: Some(0),
                };
                Frontier {
                    back: odd,
                    front: odd,
                }
            }
            TourShape::BackOnly => Frontier {
                back: even(0),
                front: none,
            },
            TourShape::FrontOnly => Frontier {
                back: none,
                front: even(0),
            },
            TourShape::EvenJoined => Frontier {
                back: even(0),
                front: even(0),
            },
            TourShape::EvenSplit => Frontier {
                back: even(0),
                front: even(1),
            },
            TourShape::Closed => return None,
        };
        Some(frontier)
    }
}

const FRESH_BACK: u8 = 2;
const FRESH_FRONT: u8 = 3;

/// Degree class of a frontier vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Degree {
    Zero,
    Odd,
    Even,
}

impl Degree {
    fn of(copies: u8) -> Self {
        match copies {
            0 => Degree::Zero,
            c if c % 2 == 1 => Degree::Odd,
            _ => Degree::Even,
        }
    }

    fn plus(self, copies: u8) -> Self {
        if copies == 0 {
            return self;
        }
        match (self, copies % 2 == 1) {
            (Degree::Zero, _) => Degree::of(copies),
            (Degree::Odd, true) | (Degree::Even, false) => Degree::Even,
            (Degree::Odd, false) | (Degree::Even, true) => Degree::Odd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct End {
    degree: Degree,
    component: Option<u8>,
}

impl End {
    const NONE: End = End {
        degree: Degree::Zero,
        component: None,
    };

    /// Same vertex with more edges attached.
    fn extend(self, copies: u8, fresh: u8) -> End {
        if copies == 0 {
            return self;
        }
        End {
            degree: self.degree.plus(copies),
            component: self.component.or(Some(fresh)),
        }
    }

    /// The vertex in the next column reached by `copies` horizontal edges.
    fn carry(self, copies: u8, fresh: u8) -> End {
        if copies == 0 {
            return End::NONE;
        }
        End {
            degree: Degree::of(copies),
            component: self.component.or(Some(fresh)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    back: End,
    front: End,
}

impl Frontier {
    /// Merges the components of both ends.
    fn link(&mut self) {
        if let (Some(back), Some(_)) = (self.back.component, self.front.component) {
            self.front.component = Some(back);
        }
    }

    fn components(&self) -> [Option<u8>; 2] {
        let back = self.back.component;
        let front = self.front.component.filter(|&f| Some(f) != back);
        [back, front]
    }

    fn component_count(&self) -> usize {
        self.components().into_iter().flatten().count()
    }

    fn contains(&self, label: u8) -> bool {
        self.back.component == Some(label) || self.front.component == Some(label)
    }

    fn shape(&self) -> Option<TourShape> {
        use Degree::{Even, Odd, Zero};
        let shape = match (self.back.degree, self.front.degree, self.component_count()) {
            (Zero, Zero, 0) => TourShape::Empty,
            (Odd, Odd, 1) => TourShape::OddOdd,
            (Even, Zero, 1) => TourShape::BackOnly,
            (Zero, Even, 1) => TourShape::FrontOnly,
            (Even, Even, 1) => TourShape::EvenJoined,
            (Even, Even, 2) => TourShape::EvenSplit,
            _ => return None,
        };
        Some(shape)
    }
}

/// Vertical edges an aisle visit puts into the tour graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edges {
    back: u8,
    front: u8,
    /// The back and front vertices end up in one component.
    links: bool,
}

impl Edges {
    fn of(visit: Option<&AisleVisit>) -> Self {
        let (back, front, links) = match visit {
            None => (0, 0, false),
            Some(AisleVisit::Traverse) => (1, 1, true),
            Some(AisleVisit::Loop) => (2, 2, true),
            Some(AisleVisit::FromFront { .. }) => (0, 2, false),
            Some(AisleVisit::FromBack { .. }) => (2, 0, false),
            Some(AisleVisit::FromBothEnds { .. }) => (2, 2, false),
        };
        Self { back, front, links }
    }

    fn is_none(&self) -> bool {
        self.back == 0 && self.front == 0
    }
}
