//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is out of range (rows and columns run 0-2)")]
    OutOfRange { row: usize, col: usize },

    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: String,
    },

    #[error("invalid encoding '{input}': {reason}")]
    InvalidEncoding { input: String, reason: String },

    #[error("states '{from}' and '{to}' do not differ by exactly one placement")]
    InvalidTransition { from: String, to: String },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
