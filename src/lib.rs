pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod layout;
pub mod node;
pub mod path;
pub mod pathfinding;
pub mod visit_log;
pub mod visited;

pub use error::{Error, Result};
pub use grid::{Cell, Coord, Grid};
pub use heuristic::Heuristic;
pub use path::Path;
pub use pathfinding::{AStarPathFinder, SearchOutcome, SearchState, SearchStats};
pub use visit_log::{VisitLog, VisitObserver};
