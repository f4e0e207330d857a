//! Game session: turn alternation and the game-over state machine.
//!
//! The session is the consumer contract for the board and engine: an
//! orchestrator applies moves here, checks whether the game ended, and
//! asks the engine for a move when it is the automated player's turn.
//!
//! State machine: `InProgress → Ended(Win | Draw) → (reset)`. No move is
//! legal once ended; reset replaces the board wholesale with a fresh one.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Square};
use crate::error::GameError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win(Player),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Win(p) if *p == player)
    }
}

/// Whether a session is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Moves are being accepted.
    InProgress,
    /// The game ended with the recorded outcome.
    Ended(Outcome),
}

/// A single game from empty board to outcome.
///
/// X moves first; the active player alternates after every successful
/// move.
///
/// ```
/// use tictactoe_engine::{GameSession, Player, Square};
///
/// let mut session = GameSession::new();
/// session.apply_move(Square::new(0, 0).unwrap()).unwrap();
/// assert_eq!(session.active_player(), Player::O);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    active: Player,
    state: SessionState,
}

impl GameSession {
    /// Start a fresh session with an empty board and X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::X,
            state: SessionState::InProgress,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::InProgress => None,
            SessionState::Ended(outcome) => Some(outcome),
        }
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::Ended(_))
    }

    /// Apply the active player's move.
    ///
    /// Errors with `GameOver` once the session has ended and with
    /// `CellOccupied` for a taken square; neither changes any state. On
    /// success the board is checked for a winner, then for fullness; if
    /// either ends the game the outcome is recorded, otherwise the turn
    /// passes to the other player.
    pub fn apply_move(&mut self, square: Square) -> Result<SessionState, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.mark(square, self.active)?;

        if let Some(winner) = self.board.winner() {
            self.state = SessionState::Ended(Outcome::Win(winner));
        } else if self.board.is_full() {
            self.state = SessionState::Ended(Outcome::Draw);
        } else {
            self.active = self.active.opponent();
        }

        Ok(self.state)
    }

    /// Replace the session with a fresh one.
    ///
    /// The board is a new instance, not an in-place clear.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
