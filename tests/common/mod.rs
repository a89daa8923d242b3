use minefield::grid::NEIGHBOR_OFFSETS;
use minefield::layout::Layout;
use minefield::{Coord, Grid, Path};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::collections::{HashSet, VecDeque};
use std::fs;

/// Scenario fixture stored as JSON under test_data/scenarios
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioData {
    pub test_name: String,
    /// Grid rows in layout format
    pub layout: Vec<String>,
    pub heuristic: String,
    #[serde(default)]
    pub max_search_distance: Option<u32>,
    /// Overrides the layout's start marker
    #[serde(default)]
    pub start: Option<[i32; 2]>,
    /// Overrides the layout's goal marker
    #[serde(default)]
    pub goal: Option<[i32; 2]>,
    pub expect_path: bool,
    /// Expected number of cells in the path, endpoints included
    #[serde(default)]
    pub expected_cells: Option<usize>,
    /// Cells the path must avoid
    #[serde(default)]
    pub forbidden: Vec<[i32; 2]>,
}

impl ScenarioData {
    pub fn layout(&self) -> Layout {
        Layout::parse(&self.layout.join("\n")).expect("fixture layout should parse")
    }
}

/// Load a scenario from JSON file
pub fn load_scenario(path: &std::path::Path) -> Result<ScenarioData, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let data: ScenarioData = serde_json::from_str(&contents)?;
    Ok(data)
}

/// Shortest 8-connected step count by breadth-first search
pub fn bfs_steps(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
    if grid.is_blocked(start) || grid.is_blocked(goal) {
        return None;
    }

    let mut dist = vec![usize::MAX; grid.cell_count()];
    let mut queue = VecDeque::new();
    dist[grid.index_of(start).unwrap()] = 0;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = dist[grid.index_of(current).unwrap()];
        if current == goal {
            return Some(d);
        }
        for (d_row, d_col) in NEIGHBOR_OFFSETS {
            let next = current.offset(d_row, d_col);
            if grid.is_blocked(next) {
                continue;
            }
            let index = grid.index_of(next).unwrap();
            if dist[index] == usize::MAX {
                dist[index] = d + 1;
                queue.push_back(next);
            }
        }
    }

    None
}

/// Panic unless `path` is a contiguous, landmine-free route from start to goal
pub fn assert_valid_path(grid: &Grid, path: &Path, start: Coord, goal: Coord) {
    assert!(!path.is_empty(), "path should never be empty");
    assert_eq!(path.start(), Some(start), "path should begin at the start");
    assert_eq!(path.goal(), Some(goal), "path should end at the goal");

    let mut seen = HashSet::new();
    for &cell in path {
        assert!(grid.contains(cell), "path leaves the grid at {}", cell);
        assert!(!grid.is_blocked(cell), "path crosses landmine at {}", cell);
        assert!(seen.insert(cell), "path revisits {}", cell);
    }

    for pair in path.cells().windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "path jumps from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

/// Random minefield with the given landmine probability. `keep_free` cells are never mined.
pub fn random_grid(seed: u64, width: i32, height: i32, density: f64, keep_free: &[Coord]) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height).unwrap();
    for row in 0..width {
        for col in 0..height {
            let coord = Coord::new(row, col);
            if !keep_free.contains(&coord) && rng.random_bool(density) {
                grid.set_blocked(coord, true).unwrap();
            }
        }
    }
    grid
}

/// Grid mirroring used to run each scenario in four orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Original,
    /// Mirror left-right (col axis)
    Horizontal,
    /// Mirror top-bottom (row axis)
    Vertical,
    Both,
}

impl Mirror {
    pub const ALL: [Mirror; 4] = [Mirror::Original, Mirror::Horizontal, Mirror::Vertical, Mirror::Both];

    pub fn name(&self) -> &'static str {
        match self {
            Mirror::Original => "original",
            Mirror::Horizontal => "h_flip",
            Mirror::Vertical => "v_flip",
            Mirror::Both => "hv_flip",
        }
    }

    pub fn coord(&self, grid: &Grid, c: Coord) -> Coord {
        let (width, height) = grid.bounds();
        match self {
            Mirror::Original => c,
            Mirror::Horizontal => Coord::new(c.row, height - 1 - c.col),
            Mirror::Vertical => Coord::new(width - 1 - c.row, c.col),
            Mirror::Both => Coord::new(width - 1 - c.row, height - 1 - c.col),
        }
    }

    pub fn grid(&self, grid: &Grid) -> Grid {
        let (width, height) = grid.bounds();
        let blocked: Vec<Coord> = grid.blocked_cells().into_iter().map(|c| self.coord(grid, c)).collect();
        Grid::with_blocked(width, height, &blocked).unwrap()
    }
}

/// Visualize a path on a grid
pub fn visualize_path(grid: &Grid, path: Option<&Path>, start: Coord, goal: Coord) -> String {
    let mut result = String::new();
    if let Some(path) = path {
        result.push_str(&format!("\nPath: {}\n", path));
        result.push_str(&format!("Length: {} cells, {} steps\n\n", path.len(), path.steps()));
    } else {
        result.push_str("\nNo path\n\n");
    }
    result.push_str(&minefield::layout::format_grid(grid, Some(start), Some(goal), path));
    result
}
