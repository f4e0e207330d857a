//! Player identity and cell contents.
//!
//! ## Player
//!
//! The two sides. X moves first and is the maximizing side in the search
//! (a won game for X scores +1); O is the minimizing side (−1).
//!
//! ## Cell
//!
//! One square's contents: empty or taken by a player. Kept as an explicit
//! three-valued enumeration so player identity never leaks into arithmetic.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// ```
/// use tictactoe_engine::Player;
///
/// assert_eq!(Player::X.opponent(), Player::O);
/// assert_eq!(Player::X.score(), 1);
/// assert_eq!(Player::O.score(), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First to move; the maximizing side.
    X,
    /// Second to move; the minimizing side.
    O,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Terminal score of a board this player has won: +1 for X, −1 for O.
    #[must_use]
    pub const fn score(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "Player X"),
            Player::O => write!(f, "Player O"),
        }
    }
}

/// Contents of one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a player.
    Taken(Player),
}

impl Cell {
    /// Check whether the cell holds no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(p) => Some(p),
        }
    }
}
