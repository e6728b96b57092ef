//! Error types for move application
//!
//! The pure validation predicates answer with booleans; the typed errors
//! here belong to the session's apply path, so hosts can tell a player why
//! a move was refused.

use thiserror::Error;

use crate::board::Square;
use crate::pieces::PieceColor;

/// Reasons a proposed move is refused by a game session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece at the source square
    #[error("no piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece at the source square does not belong to the mover
    #[error("piece at {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: PieceColor },

    /// Move fails the piece's movement rules
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// No piece is currently selected
    #[error("no piece is currently selected")]
    NothingSelected,
}

/// Result type alias for move application.
pub type MoveResult<T> = Result<T, MoveError>;
