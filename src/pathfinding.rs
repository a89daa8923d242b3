//! A* search over a landmine grid.
//!
//! Movement is 8-connected and every move costs 1, diagonals included. Each
//! call to [`AStarPathFinder::find_path`] allocates its own node table,
//! frontier and closed set, so one finder (and the grid it borrows) can
//! serve concurrent searches from several threads.

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::grid::{Coord, Grid, NEIGHBOR_OFFSETS};
use crate::heuristic::Heuristic;
use crate::node::{NodeId, NodeTable};
use crate::path::Path;
use crate::visited::VisitedSet;
use crate::visit_log::{NoopObserver, VisitObserver};
use log::{debug, trace};
use serde::Serialize;
use std::time::Instant;

/// Cost of one move, orthogonal or diagonal
pub const MOVE_COST: f64 = 1.0;

/// Default depth budget
pub const DEFAULT_MAX_SEARCH_DISTANCE: u32 = 10_000;

/// Lifecycle of a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchState {
    Ready,
    Running,
    Succeeded,
    Failed,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier
    pub expanded: usize,
    /// Visit notifications sent to the observer
    pub visit_notifications: usize,
    /// Deepest node discovered, in steps from the start
    pub max_depth: u32,
    /// Largest frontier size reached
    pub frontier_high_water: usize,
    /// Closed set size when the search stopped
    pub closed: usize,
    /// Closed nodes moved back to the frontier after a cheaper route was found
    pub reopened: usize,
}

/// Result of a search that passed input validation
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found { path: Path, stats: SearchStats },
    /// Frontier exhausted or depth budget spent without reaching the goal.
    /// The two causes are not distinguished.
    NoPathFound { stats: SearchStats },
}

impl SearchOutcome {
    pub fn state(&self) -> SearchState {
        match self {
            SearchOutcome::Found { .. } => SearchState::Succeeded,
            SearchOutcome::NoPathFound { .. } => SearchState::Failed,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::NoPathFound { .. } => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::NoPathFound { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::NoPathFound { stats } => stats,
        }
    }
}

/// A* pathfinder
#[derive(Debug, Clone, Copy)]
pub struct AStarPathFinder<'a> {
    grid: &'a Grid,
    max_search_distance: u32,
}

impl<'a> AStarPathFinder<'a> {
    /// Create a finder that gives up once a node `max_search_distance` steps
    /// from the start has been discovered
    pub fn new(grid: &'a Grid, max_search_distance: u32) -> Result<Self> {
        if max_search_distance == 0 {
            return Err(Error::InvalidBudget);
        }
        Ok(Self {
            grid,
            max_search_distance,
        })
    }

    /// Create with [`DEFAULT_MAX_SEARCH_DISTANCE`]
    pub fn with_defaults(grid: &'a Grid) -> Self {
        Self {
            grid,
            max_search_distance: DEFAULT_MAX_SEARCH_DISTANCE,
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn max_search_distance(&self) -> u32 {
        self.max_search_distance
    }

    /// Solve from the top-left corner to the bottom-right corner, selecting
    /// the heuristic by name (unknown names use Euclidean)
    pub fn solve_maze(&self, heuristic_name: &str) -> Result<SearchOutcome> {
        let heuristic = Heuristic::from_name(heuristic_name);
        self.find_path(self.grid.top_left(), self.grid.bottom_right(), heuristic)
    }

    /// Find a path from start to goal
    pub fn find_path(&self, start: Coord, goal: Coord, heuristic: Heuristic) -> Result<SearchOutcome> {
        self.find_path_observed(start, goal, heuristic, &mut NoopObserver)
    }

    /// Find a path, reporting every considered neighbour to `observer`
    pub fn find_path_observed(
        &self,
        start: Coord,
        goal: Coord,
        heuristic: Heuristic,
        observer: &mut dyn VisitObserver,
    ) -> Result<SearchOutcome> {
        let start = self.grid.validate(start)?;
        let goal = self.grid.validate(goal)?;
        for endpoint in [start, goal] {
            if self.grid.is_blocked(endpoint) {
                return Err(Error::BlockedEndpoint {
                    row: endpoint.row,
                    col: endpoint.col,
                });
            }
        }

        let started = Instant::now();
        debug!(
            "[AStar] find_path: start={} goal={} heuristic={} budget={}",
            start, goal, heuristic, self.max_search_distance
        );

        let mut run = SearchRun::new(self.grid, heuristic, start, goal)?;
        let reached = run.execute(self.max_search_distance, observer);

        // The goal counts as found once it has a parent, even if the budget
        // stopped the loop before it was popped.
        let outcome = if reached || run.nodes.get(run.goal_id).parent.is_some() {
            run.transition(SearchState::Succeeded);
            let path = Path::from_goal_to_start(run.nodes.trace_back(run.goal_id), started.elapsed());
            debug!(
                "[AStar] FOUND: {} cells after expanding {} nodes in {}ms",
                path.len(),
                run.stats.expanded,
                path.runtime_millis()
            );
            SearchOutcome::Found {
                path,
                stats: run.stats,
            }
        } else {
            run.transition(SearchState::Failed);
            debug!(
                "[AStar] FAILED: NoPath after expanding {} nodes (max depth {})",
                run.stats.expanded, run.stats.max_depth
            );
            SearchOutcome::NoPathFound { stats: run.stats }
        };

        Ok(outcome)
    }
}

/// State owned by one search invocation
struct SearchRun<'g> {
    grid: &'g Grid,
    heuristic: Heuristic,
    goal: Coord,
    goal_id: NodeId,
    nodes: NodeTable,
    frontier: Frontier,
    visited: VisitedSet,
    state: SearchState,
    stats: SearchStats,
}

impl<'g> SearchRun<'g> {
    fn new(grid: &'g Grid, heuristic: Heuristic, start: Coord, goal: Coord) -> Result<Self> {
        let start_id = grid.index_of(start)?;
        let goal_id = grid.index_of(goal)?;

        let mut nodes = NodeTable::new(grid);
        let visited = VisitedSet::with_capacity(nodes.len());
        let mut frontier = Frontier::new();

        let root = nodes.get_mut(start_id);
        root.g_cost = 0.0;
        root.h_cost = heuristic.estimate(start, goal);
        root.depth = 0;
        frontier.insert(start_id, root.f_cost());
        nodes.get_mut(goal_id).parent = None;

        Ok(SearchRun {
            grid,
            heuristic,
            goal,
            goal_id,
            nodes,
            frontier,
            visited,
            state: SearchState::Ready,
            stats: SearchStats::default(),
        })
    }

    fn transition(&mut self, next: SearchState) {
        debug!("[AStar] {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Run the main loop. Returns true if the goal was popped from the frontier.
    fn execute(&mut self, max_search_distance: u32, observer: &mut dyn VisitObserver) -> bool {
        self.transition(SearchState::Running);
        let mut max_depth = 0;
        let mut reached = false;

        while max_depth < max_search_distance {
            let Some(current) = self.frontier.pop_min() else {
                break;
            };
            self.stats.expanded += 1;

            if current == self.goal_id {
                reached = true;
                break;
            }

            self.visited.add(current);
            let (coord, g_cost) = {
                let node = self.nodes.get(current);
                (node.coord, node.g_cost)
            };
            trace!("[AStar] expanding {} g={} depth={}", coord, g_cost, self.nodes.get(current).depth);

            for (d_row, d_col) in NEIGHBOR_OFFSETS {
                let next = coord.offset(d_row, d_col);
                let Ok(next_id) = self.grid.index_of(next) else {
                    continue;
                };
                if self.grid.is_blocked(next) {
                    continue;
                }

                let tentative = g_cost + MOVE_COST;
                observer.visited(next);
                self.stats.visit_notifications += 1;

                // A cheaper route supersedes whatever was recorded before
                if tentative < self.nodes.get(next_id).g_cost {
                    self.frontier.remove(next_id);
                    if self.visited.remove(next_id) {
                        trace!("[AStar] reopening {} g={}", next, tentative);
                        self.stats.reopened += 1;
                    }
                }

                if !self.frontier.contains(next_id) && !self.visited.contains(next_id) {
                    let h_cost = self.heuristic.estimate(next, self.goal);
                    let node = self.nodes.get_mut(next_id);
                    node.g_cost = tentative;
                    node.h_cost = h_cost;
                    let depth = self.nodes.set_parent(next_id, current);
                    max_depth = max_depth.max(depth);
                    self.frontier.insert(next_id, tentative + h_cost);
                }
            }
        }

        self.stats.max_depth = max_depth;
        self.stats.frontier_high_water = self.frontier.high_water();
        self.stats.closed = self.visited.len();
        reached
    }
}
