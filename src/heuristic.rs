//! Distance estimators used to order the A* frontier.
//!
//! Moves cost 1 in every direction, diagonals included. Under that cost
//! model only Chebyshev is admissible (and exact on an empty grid).
//! Euclidean overestimates diagonal distance and Manhattan overestimates
//! any diagonal component, so with either of them the search can settle
//! for a path longer than the shortest one.

use crate::grid::Coord;
use log::warn;

/// Selectable heuristic. Unknown names resolve to [`Heuristic::Euclidean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Chebyshev,
    Euclidean,
    Manhattan,
}

impl Heuristic {
    /// Every heuristic, in the order they are offered to users
    pub const ALL: [Heuristic; 3] = [Heuristic::Chebyshev, Heuristic::Euclidean, Heuristic::Manhattan];

    /// Resolve a heuristic by its exact (case-sensitive) name.
    ///
    /// Unrecognized names fall back to Euclidean and log a warning.
    pub fn from_name(name: &str) -> Self {
        match Self::lookup(name) {
            Some(heuristic) => heuristic,
            None => {
                warn!(
                    "unrecognized heuristic {:?}, falling back to {}",
                    name,
                    Heuristic::Euclidean
                );
                Heuristic::Euclidean
            }
        }
    }

    /// Exact-name lookup without the fallback
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Chebyshev => "Chebyshev",
            Heuristic::Euclidean => "Euclidean",
            Heuristic::Manhattan => "Manhattan",
        }
    }

    /// Estimated cost from `from` to `to`
    pub fn estimate(&self, from: Coord, to: Coord) -> f64 {
        match self {
            Heuristic::Chebyshev => chebyshev(from, to),
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Manhattan => manhattan(from, to),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn deltas(from: Coord, to: Coord) -> (f64, f64) {
    (
        f64::from((from.row - to.row).abs()),
        f64::from((from.col - to.col).abs()),
    )
}

/// `max(|dx|, |dy|)`: the exact step count on an open 8-connected grid
pub fn chebyshev(from: Coord, to: Coord) -> f64 {
    let (dx, dy) = deltas(from, to);
    (dx + dy) - dx.min(dy)
}

/// Straight-line distance
pub fn euclidean(from: Coord, to: Coord) -> f64 {
    let (dx, dy) = deltas(from, to);
    (dx * dx + dy * dy).sqrt()
}

/// `|dx| + |dy|`
pub fn manhattan(from: Coord, to: Coord) -> f64 {
    let (dx, dy) = deltas(from, to);
    dx + dy
}
