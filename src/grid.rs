use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Offsets of the 8 neighbours of a cell, row offset outer, col offset inner.
///
/// The order is part of the search's determinism: neighbours are queued in
/// this order, and equal-priority frontier entries pop in insertion order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell address on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Coordinate shifted by a (row, col) offset
    pub fn offset(&self, d_row: i32, d_col: i32) -> Coord {
        Coord::new(self.row + d_row, self.col + d_col)
    }

    /// True if `other` is one king move away (8-connected, not the same cell)
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        let d_row = (self.row - other.row).abs();
        let d_col = (self.col - other.col).abs();
        d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A single grid cell. Blocked status is fixed when the grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub blocked: bool,
}

/// Grid of free cells and landmines.
///
/// The row axis spans `width` and the col axis spans `height`, so valid
/// coordinates are `[0, width) x [0, height)`. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell free.
    ///
    /// Both sides must be positive and the cell count must fit in an `i32`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let cells = (width as i64) * (height as i64);
        if width < 1 || height < 1 || cells > i32::MAX as i64 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            blocked: vec![false; cells as usize],
        })
    }

    /// Create a grid with specific landmines
    pub fn with_blocked(width: i32, height: i32, blocked: &[Coord]) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for &coord in blocked {
            grid.set_blocked(coord, true)?;
        }
        Ok(grid)
    }

    /// Place or clear a landmine. Setup-time only: a search borrows the grid
    /// immutably, so no cell can change while one is running.
    pub fn set_blocked(&mut self, coord: Coord, blocked: bool) -> Result<()> {
        let index = self.index_of(coord)?;
        self.blocked[index] = blocked;
        Ok(())
    }

    /// `(width, height)`
    pub fn bounds(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.width && coord.col >= 0 && coord.col < self.height
    }

    /// Check if a cell is a landmine. Out of bounds is reported as blocked.
    pub fn is_blocked(&self, coord: Coord) -> bool {
        match self.index_of(coord) {
            Ok(index) => self.blocked[index],
            Err(_) => true,
        }
    }

    /// A cell can be entered iff it is inside the grid and not a landmine
    pub fn is_traversable(&self, coord: Coord) -> bool {
        !self.is_blocked(coord)
    }

    pub fn cell_at(&self, coord: Coord) -> Result<Cell> {
        let index = self.index_of(coord)?;
        Ok(Cell {
            coord,
            blocked: self.blocked[index],
        })
    }

    /// Row-major index of a coordinate
    pub fn index_of(&self, coord: Coord) -> Result<usize> {
        if !self.contains(coord) {
            return Err(self.invalid(coord));
        }
        Ok(coord.row as usize * self.height as usize + coord.col as usize)
    }

    /// Inverse of [`Grid::index_of`]
    pub fn coord_of(&self, index: usize) -> Coord {
        let index = index as i32;
        Coord::new(index / self.height, index % self.height)
    }

    /// Reject coordinates outside the grid
    pub fn validate(&self, coord: Coord) -> Result<Coord> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(self.invalid(coord))
        }
    }

    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    pub fn free_count(&self) -> usize {
        self.cell_count() - self.blocked_count()
    }

    /// All landmine coordinates in row-major order
    pub fn blocked_cells(&self) -> Vec<Coord> {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| self.coord_of(i))
            .collect()
    }

    /// Default search origin
    pub fn top_left(&self) -> Coord {
        Coord::new(0, 0)
    }

    /// Default search target
    pub fn bottom_right(&self) -> Coord {
        Coord::new(self.width - 1, self.height - 1)
    }

    fn invalid(&self, coord: Coord) -> Error {
        Error::InvalidCoordinate {
            row: coord.row,
            col: coord.col,
            width: self.width,
            height: self.height,
        }
    }
}
