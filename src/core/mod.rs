//! Core game model: players, cells, squares, the board, and RNG.

mod board;
mod player;
mod rng;
mod square;

pub use board::{Board, SIZE};
pub use player::{Cell, Player};
pub use rng::GameRng;
pub use square::Square;
