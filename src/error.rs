//! Crate-wide error type.
//!
//! Every variant signals a programming error in the caller, not a
//! transient condition; nothing here is worth retrying.

use thiserror::Error;

use crate::core::Square;

/// Errors surfaced by the board, the engine, and the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Row or column outside `[0, 3)`.
    #[error("coordinate ({row}, {col}) is outside the 3x3 grid")]
    InvalidCoordinate { row: usize, col: usize },

    /// Attempt to mark a square that already holds a mark.
    #[error("square {0} is already occupied")]
    CellOccupied(Square),

    /// `choose_move` was asked for a move the board cannot provide:
    /// either no empty squares remain, or the game is already decided.
    /// Signals an orchestrator scheduling bug.
    #[error("no moves available on this board")]
    NoMovesAvailable,

    /// Move applied to a session that has already ended.
    #[error("the game has already ended")]
    GameOver,
}
