//! Commonly used types and utilities for ease of import.

pub use crate::{
    play_round, AiPlayer, BoardState, GameEngine, GameStatus, Mark, Move, MoveSearch, Outcome,
    Player, RandomPlayer,
};

#[cfg(feature = "std")]
pub use crate::{run_session, CliPlayer};
