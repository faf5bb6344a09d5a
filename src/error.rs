//! Error types for the solver crate

use std::fmt;

use thiserror::Error;

use crate::tictactoe::Action;

/// Why an action cannot be applied to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidActionReason {
    /// Row or column lies outside `0..=2`
    OutOfBounds,
    /// Target cell already holds a mark
    Occupied,
}

impl fmt::Display for InvalidActionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidActionReason::OutOfBounds => write!(f, "coordinates out of bounds (must be 0-2)"),
            InvalidActionReason::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Main error type for the solver crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action {action}: {reason}")]
    InvalidAction {
        action: Action,
        reason: InvalidActionReason,
    },

    #[error("game already over")]
    GameOver,

    #[error("game is still in progress")]
    GameInProgress,

    #[error("board string has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{input}' (expected 'x' or 'o')")]
    InvalidPlayer { input: String },

    #[error("invalid action input '{input}' (expected 'row col' with values 0-2)")]
    ParseAction { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error reports an action that the rules reject
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, Error::InvalidAction { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
