//! Move selection: difficulty policies and the minimax search.

mod config;
mod search;

pub use config::Difficulty;
pub use search::{minimax, DecisionEngine};
