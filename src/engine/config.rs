//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How the engine picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform draw from the empty squares.
    Random,
    /// Exhaustive minimax search. Never loses.
    Optimal,
}
