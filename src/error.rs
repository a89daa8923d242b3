//! Error types for the minefield solver

use thiserror::Error;

/// Failures detected at the API boundary.
///
/// Failing to reach the goal is not an error: the search reports it as
/// [`crate::pathfinding::SearchOutcome::NoPathFound`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("coordinate ({row}, {col}) is outside the {width}x{height} grid")]
    InvalidCoordinate {
        row: i32,
        col: i32,
        width: i32,
        height: i32,
    },

    #[error("invalid grid dimensions {width}x{height}: sides must be positive and the cell count must fit in i32")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("endpoint ({row}, {col}) is a landmine")]
    BlockedEndpoint { row: i32, col: i32 },

    #[error("search budget must be positive")]
    InvalidBudget,

    #[error("layout error on line {line}: {message}")]
    Layout { line: usize, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
