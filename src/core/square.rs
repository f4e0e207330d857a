//! Validated board coordinates.
//!
//! `Square` is the only way to address a board cell. Construction checks
//! the 3×3 bounds once, so every other API can accept a `Square` without
//! re-validating.

use serde::{Deserialize, Serialize};

use super::board::SIZE;
use crate::error::GameError;

/// A (row, col) coordinate on the 3×3 grid.
///
/// Both components are guaranteed to be in `[0, 3)`.
///
/// ```
/// use tictactoe_engine::Square;
///
/// let sq = Square::new(1, 2).unwrap();
/// assert_eq!(sq.row(), 1);
/// assert_eq!(sq.col(), 2);
/// assert!(Square::new(3, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, rejecting out-of-range coordinates.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Get the row index (0-based).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Get the column index (0-based).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Iterate over all nine squares in row-major order.
    ///
    /// Row-major order is the tie-break order everywhere in the crate:
    /// move enumeration and the search both follow it.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIZE).flat_map(|row| {
            (0..SIZE).map(move |col| Square {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
