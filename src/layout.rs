//! Plain-text grid layouts.
//!
//! Format, one line per row and one character per column:
//! - `■` or `#`: landmine
//! - `□` or `.`: free cell
//! - `S`/`s`: start (free)
//! - `G`/`g`: goal (free)
//! - `*`: path cell (free, written by [`format_grid`])
//!
//! Blank lines are ignored.

use crate::error::{Error, Result};
use crate::grid::{Coord, Grid};
use crate::path::Path;
use std::fs;

/// A grid read from text, with the endpoints it marks (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub goal: Option<Coord>,
}

impl Layout {
    /// Load a layout from file
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let rows: Vec<(usize, &str)> = contents
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end()))
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();

        let Some(&(_, first)) = rows.first() else {
            return Err(Error::Layout {
                line: 0,
                message: "no grid rows found".to_string(),
            });
        };
        let height = first.chars().count();

        let mut blocked = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, &(line_no, line)) in rows.iter().enumerate() {
            let line_width = line.chars().count();
            if line_width != height {
                return Err(Error::Layout {
                    line: line_no,
                    message: format!("expected {} columns, found {}", height, line_width),
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let coord = Coord::new(row as i32, col as i32);
                match ch {
                    '■' | '#' => blocked.push(coord),
                    '□' | '.' | '*' => {}
                    'S' | 's' => set_marker(&mut start, coord, line_no, "start")?,
                    'G' | 'g' => set_marker(&mut goal, coord, line_no, "goal")?,
                    other => {
                        return Err(Error::Layout {
                            line: line_no,
                            message: format!("unexpected character {:?}", other),
                        })
                    }
                }
            }
        }

        let grid = Grid::with_blocked(rows.len() as i32, height as i32, &blocked)?;
        Ok(Layout { grid, start, goal })
    }

    /// Marked start, or the top-left corner
    pub fn start_or_default(&self) -> Coord {
        self.start.unwrap_or_else(|| self.grid.top_left())
    }

    /// Marked goal, or the bottom-right corner
    pub fn goal_or_default(&self) -> Coord {
        self.goal.unwrap_or_else(|| self.grid.bottom_right())
    }
}

fn set_marker(slot: &mut Option<Coord>, coord: Coord, line: usize, name: &str) -> Result<()> {
    if let Some(existing) = slot {
        return Err(Error::Layout {
            line,
            message: format!("second {} marker at {}, first at {}", name, coord, existing),
        });
    }
    *slot = Some(coord);
    Ok(())
}

/// Render a grid in layout format, optionally overlaying a solved path
pub fn format_grid(grid: &Grid, start: Option<Coord>, goal: Option<Coord>, path: Option<&Path>) -> String {
    let mut result = String::new();

    for row in 0..grid.width() {
        for col in 0..grid.height() {
            let coord = Coord::new(row, col);
            let symbol = if Some(coord) == start {
                'S'
            } else if Some(coord) == goal {
                'G'
            } else if grid.is_blocked(coord) {
                '■'
            } else if path.is_some_and(|p| p.contains(coord)) {
                '*'
            } else {
                '□'
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}
