//! # tictactoe-engine
//!
//! Game core for two-player tic-tac-toe with an automated opponent that
//! picks moves by exhaustive game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: No rendering, input, or window code. The crate is a
//!    library of value types and pure functions; a front end feeds
//!    `Square`s in and draws whatever comes back.
//!
//! 2. **Value Semantics**: `Board` is `Copy`. Every hypothetical line the
//!    search explores runs on an independent copy, so exploration can
//!    never mutate a caller's board.
//!
//! 3. **Deterministic**: The random-move policy runs on a seeded,
//!    forkable RNG. Same seed, same game.
//!
//! ## Modules
//!
//! - `core`: Players, cells, squares, the board, RNG
//! - `engine`: Difficulty policies and the minimax search
//! - `session`: Turn alternation and the game-over state machine
//! - `error`: The crate-wide error type

pub mod core;
pub mod engine;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, Player, Square};

pub use crate::engine::{minimax, DecisionEngine, Difficulty};

pub use crate::error::GameError;

pub use crate::session::{GameSession, Outcome, SessionState};
