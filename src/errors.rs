//! Errors used throughout the engine.
//!
//! One crate-wide enum covers the recoverable failure modes: a caller
//! proposing a square pair that matches no legal move, and malformed textual
//! input (FEN strings, algebraic squares). Game logic itself never panics and
//! never uses errors for control flow; illegal requests are reported and the
//! position is left untouched.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A proposed (from, to) pair matches no currently legal move. The move
    /// was not applied; the caller should re-prompt or re-select.
    #[error("no legal move from {from} to {to}")]
    InvalidMoveRequested { from: Square, to: Square },

    /// A FEN string could not be interpreted as a position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// An algebraic square reference could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),
}
