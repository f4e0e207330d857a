//! The 3×3 board.
//!
//! ## Representation
//!
//! A fixed row-major grid of `Cell`s plus an occupied-cell counter. The
//! counter is redundant with the grid but keeps `is_full` O(1).
//!
//! ## Value Semantics
//!
//! `Board` is `Copy` (nine cells and a counter). The search copies the
//! board for every hypothetical move, so backtracking never has to undo
//! anything and exploration cannot alias the caller's state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Cell, Player};
use super::square::Square;
use crate::error::GameError;

/// Side length of the grid.
pub const SIZE: usize = 3;

/// The eight winning lines, scanned in a fixed order: rows top to bottom,
/// then columns left to right, then the two diagonals. The first matching
/// line wins; a well-formed game has at most one, so the order only
/// matters as a deterministic tie-break on malformed boards.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3×3 tic-tac-toe board.
///
/// ```
/// use tictactoe_engine::{Board, Player, Square};
///
/// let mut board = Board::new();
/// board.mark(Square::new(1, 1).unwrap(), Player::X).unwrap();
/// assert_eq!(board.winner(), None);
/// assert_eq!(board.empty_squares().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    occupied: u8,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the contents of a square.
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    /// Check whether a square is unmarked.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square).is_empty()
    }

    /// Mark a square for a player.
    ///
    /// Errors with `CellOccupied` if the square already holds a mark.
    /// A mark is never reverted; the only way back to an empty square is
    /// a fresh board.
    pub fn mark(&mut self, square: Square, player: Player) -> Result<(), GameError> {
        if !self.is_empty(square) {
            return Err(GameError::CellOccupied(square));
        }
        self.cells[square.row()][square.col()] = Cell::Taken(player);
        self.occupied += 1;
        Ok(())
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied as usize
    }

    /// Check whether all nine squares are marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied as usize == SIZE * SIZE
    }

    /// All empty squares in row-major order.
    ///
    /// Row-major order is load-bearing: the search visits moves in this
    /// order and breaks score ties by first-seen, so enumeration order is
    /// part of the engine's deterministic behavior.
    #[must_use]
    pub fn empty_squares(&self) -> SmallVec<[Square; 9]> {
        Square::all().filter(|&sq| self.is_empty(sq)).collect()
    }

    /// The winner, if any line of three matching marks exists.
    ///
    /// Returns `None` both for in-progress boards and for draws; a draw is
    /// `winner().is_none() && is_full()`, checked separately by callers.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        for line in &LINES {
            let [a, b, c] = *line;
            if let Cell::Taken(p) = self.cells[a.0][a.1] {
                if self.cells[b.0][b.1] == Cell::Taken(p) && self.cells[c.0][c.1] == Cell::Taken(p)
                {
                    return Some(p);
                }
            }
        }
        None
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let glyph = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Taken(Player::X) => 'X',
                    Cell::Taken(Player::O) => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    /// Build a board by marking squares in the given order.
    fn board_with(marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in marks {
            board.mark(sq(row, col), player).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.empty_squares().len(), 9);
        assert!(Square::all().all(|s| board.is_empty(s)));
    }

    #[test]
    fn test_mark_sets_exactly_one_cell() {
        let mut board = Board::new();
        board.mark(sq(1, 1), Player::X).unwrap();

        assert_eq!(board.occupied(), 1);
        assert_eq!(board.cell(sq(1, 1)), Cell::Taken(Player::X));
        for square in Square::all().filter(|&s| s != sq(1, 1)) {
            assert!(board.is_empty(square));
        }
    }

    #[test]
    fn test_mark_occupied_is_rejected() {
        let mut board = Board::new();
        board.mark(sq(0, 0), Player::X).unwrap();

        let err = board.mark(sq(0, 0), Player::O).unwrap_err();
        assert_eq!(err, GameError::CellOccupied(sq(0, 0)));

        // The rejected mark must not have changed anything
        assert_eq!(board.cell(sq(0, 0)), Cell::Taken(Player::X));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_empty_squares_row_major() {
        let board = board_with(&[(0, 1, Player::X), (2, 2, Player::O)]);
        let empties = board.empty_squares();

        assert_eq!(empties.len(), 7);
        assert_eq!(empties[0], sq(0, 0));
        assert_eq!(empties[1], sq(0, 2));
        assert_eq!(empties[6], sq(2, 1));
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[
            (1, 0, Player::O),
            (1, 1, Player::O),
            (1, 2, Player::O),
        ]);
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[
            (0, 2, Player::X),
            (1, 2, Player::X),
            (2, 2, Player::X),
        ]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_diagonal_wins() {
        let main = board_with(&[
            (0, 0, Player::X),
            (1, 1, Player::X),
            (2, 2, Player::X),
        ]);
        assert_eq!(main.winner(), Some(Player::X));

        let anti = board_with(&[
            (0, 2, Player::O),
            (1, 1, Player::O),
            (2, 0, Player::O),
        ]);
        assert_eq!(anti.winner(), Some(Player::O));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
            (1, 0, Player::X),
            (1, 1, Player::O),
            (1, 2, Player::O),
            (2, 0, Player::O),
            (2, 1, Player::X),
            (2, 2, Player::X),
        ]);

        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.empty_squares().is_empty());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut board = Board::new();
        let snapshot = board;

        board.mark(sq(0, 0), Player::X).unwrap();

        assert_eq!(snapshot.occupied(), 0);
        assert!(snapshot.is_empty(sq(0, 0)));
    }

    #[test]
    fn test_display() {
        let board = board_with(&[(0, 0, Player::X), (1, 1, Player::O)]);
        assert_eq!(format!("{}", board), "X . .\n. O .\n. . .\n");
    }

    #[test]
    fn test_serde_round_trip() {
        let board = board_with(&[(0, 0, Player::X), (2, 1, Player::O)]);
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
