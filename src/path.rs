use crate::grid::Coord;
use serde::Serialize;
use std::time::Duration;

/// A solved route, stored from start to goal.
///
/// Consecutive cells are 8-adjacent and none of them is a landmine.
/// `len()` counts cells, so a start-equals-goal path has length 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    cells: Vec<Coord>,
    runtime_millis: u64,
}

impl Path {
    /// Build a path from the goal-to-start order produced by parent tracing
    pub(crate) fn from_goal_to_start(mut cells: Vec<Coord>, runtime: Duration) -> Self {
        cells.reverse();
        Path {
            cells,
            runtime_millis: runtime.as_millis() as u64,
        }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Coord> {
        self.cells.iter()
    }

    /// Number of cells, endpoints included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves. Every move costs 1, so this is also the path cost.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Wall time of the search that produced this path
    pub fn runtime_millis(&self) -> u64 {
        self.runtime_millis
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_path(&self.cells))
    }
}

/// Format path for display
pub fn format_path(path: &[Coord]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_into_start_to_goal_order() {
        let traced = vec![Coord::new(2, 2), Coord::new(1, 1), Coord::new(0, 0)];
        let path = Path::from_goal_to_start(traced, Duration::from_micros(2_500));

        assert_eq!(path.start(), Some(Coord::new(0, 0)));
        assert_eq!(path.goal(), Some(Coord::new(2, 2)));
        assert_eq!(path.len(), 3);
        assert_eq!(path.steps(), 2);
        assert_eq!(path.runtime_millis(), 2);
        assert!(path.contains(Coord::new(1, 1)));
    }

    #[test]
    fn formats_cells() {
        let path = Path::from_goal_to_start(vec![Coord::new(0, 1), Coord::new(0, 0)], Duration::ZERO);
        assert_eq!(path.to_string(), "(0,0) -> (0,1)");
        assert_eq!(format_path(&[]), "No path");
    }

    #[test]
    fn serializes_cells_and_runtime() {
        let path = Path::from_goal_to_start(vec![Coord::new(1, 0)], Duration::from_millis(7));
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["runtime_millis"], 7);
        assert_eq!(json["cells"][0]["row"], 1);
        assert_eq!(json["cells"][0]["col"], 0);
    }
}
