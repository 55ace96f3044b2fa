//! Errors raised while building or rendering a maze

use thiserror::Error;

use crate::grid::Pos;

/// Everything that can go wrong inside the maze core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Requested dimensions leave no room for a single maze cell.
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A dimension was neither given on the command line nor in the config.
    #[error("missing maze {0}")]
    MissingDimension(&'static str),

    /// Direction requested between two cells that do not share a side.
    #[error("cell {to} is not next to cell {from}")]
    NotAdjacent { from: Pos, to: Pos },

    /// Write outside the grid.
    #[error("position ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Backtracking stack ran dry before every cell was visited.
    #[error("backtracking stack exhausted after visiting {visited} of {total} cells")]
    BacktrackExhausted { visited: usize, total: usize },

    /// More rooms asked for than the layout can hold.
    #[error("cannot place {requested} rooms, layout has room for {available}")]
    TooManyRooms { requested: usize, available: usize },

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
