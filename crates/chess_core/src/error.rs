//! Error types for board and rules operations.
//!
//! Every variant is a caller-input error detected before any mutation, so a
//! failed call leaves the board exactly as it was.

use thiserror::Error;

use crate::types::{Color, Move, Square};

/// Errors raised by the board model, the rules queries and input validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Row or column outside `0..8`
    #[error("Invalid coordinate: row {row}, col {col} (must be 0-7)")]
    InvalidCoordinate { row: u8, col: u8 },

    /// Move requested from an unoccupied cell
    #[error("No piece at source square {0}")]
    EmptySource(Square),

    /// Check or mate query for a side that has no king on the board
    #[error("No {0} king on the board")]
    KingNotFound(Color),

    /// Move text could not be parsed
    #[error("Invalid move notation: {0:?} (expected e.g. \"e2 e4\")")]
    InvalidNotation(String),

    /// Piece on the source square belongs to the other side
    #[error("Piece at {square} does not belong to {side}")]
    WrongColor { square: Square, side: Color },

    /// Move rejected by a legality check
    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    /// Board diagram could not be parsed
    #[error("Invalid board diagram: {0}")]
    InvalidBoardText(String),
}

/// Result type alias for board and rules operations
pub type Result<T> = std::result::Result<T, ChessError>;
