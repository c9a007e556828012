//! Core Tic-Tac-Toe engine (no_std compatible)
//!
//! This module contains the board model, the minimax search and the round
//! state machine. It needs only `alloc` and can be compiled without std.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod game;

// Re-export commonly used types
pub use ai::{MoveSearch, Outcome};
pub use board::{BoardState, Grid};
pub use common::{BoardError, Cell, Mark, Move};
pub use config::*;
pub use game::{GameEngine, GameStatus};
