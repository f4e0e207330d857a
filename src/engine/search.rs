//! The decision engine and its exhaustive minimax search.
//!
//! ## Scoring Convention
//!
//! A board X has won scores +1, a board O has won scores −1, a draw 0.
//! X is therefore the maximizing side, O the minimizing side.
//!
//! ## Perspective
//!
//! The Optimal policy always seeds the search with `maximizing = false`:
//! it evaluates as though the minimizing side is about to move, which
//! means the engine is built to play O. The configured player identity
//! does not alter the perspective; see DESIGN.md for the decision record.
//!
//! ## Complexity
//!
//! Exhaustive and unpruned. The tree is bounded by 9! leaf paths and in
//! practice far smaller thanks to early terminal cutoffs, so no alpha-beta
//! or caching is warranted.

use crate::core::{Board, GameRng, Player, Square};
use crate::error::GameError;

use super::config::Difficulty;

/// Move-selection engine for one fixed player.
///
/// Stateless between calls apart from its configuration and the RNG that
/// backs the Random difficulty. Each call works on copies of the board it
/// is handed; the caller's board is never touched.
pub struct DecisionEngine {
    difficulty: Difficulty,
    player: Player,
    rng: GameRng,
}

impl DecisionEngine {
    /// Create an engine with a fixed difficulty and player identity.
    ///
    /// The seed only affects the Random difficulty; the Optimal search is
    /// fully deterministic.
    #[must_use]
    pub fn new(difficulty: Difficulty, player: Player, seed: u64) -> Self {
        Self {
            difficulty,
            player,
            rng: GameRng::new(seed),
        }
    }

    /// The configured difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The player this engine moves for.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Pick the next move for the current board.
    ///
    /// Errors with `NoMovesAvailable` if the board has no empty squares,
    /// or (Optimal only) if the board is already decided — both mean the
    /// orchestrator asked for a move it should not have.
    pub fn choose_move(&mut self, board: &Board) -> Result<Square, GameError> {
        match self.difficulty {
            Difficulty::Random => {
                let empties = board.empty_squares();
                self.rng
                    .choose(&empties)
                    .copied()
                    .ok_or(GameError::NoMovesAvailable)
            }
            Difficulty::Optimal => {
                let (_, best) = minimax(*board, false);
                best.ok_or(GameError::NoMovesAvailable)
            }
        }
    }
}

/// Exhaustive minimax over every empty square.
///
/// Returns the extremal score reachable from `board` with the given side
/// to move, and the first move (in row-major order) that achieves it.
/// Terminal boards return a `None` move.
///
/// Base cases are checked in a fixed order: X win (+1), O win (−1), full
/// board (0). The recursive case copies the board per hypothetical move,
/// marks X when maximizing and O otherwise, and flips the flag. Ties are
/// broken by strict comparison, so the first move reaching the extremal
/// score is kept.
#[must_use]
pub fn minimax(board: Board, maximizing: bool) -> (i8, Option<Square>) {
    if let Some(winner) = board.winner() {
        return (winner.score(), None);
    }
    if board.is_full() {
        return (0, None);
    }

    let mover = if maximizing { Player::X } else { Player::O };
    let mut best_score: i8 = if maximizing { i8::MIN } else { i8::MAX };
    let mut best_move = None;

    for square in board.empty_squares() {
        let mut next = board;
        next.mark(square, mover)
            .expect("empty_squares only yields unmarked squares");

        let (score, _) = minimax(next, !maximizing);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(square);
        }
    }

    (best_score, best_move)
}
