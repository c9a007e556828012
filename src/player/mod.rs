//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: Perfect play through exhaustive minimax
//! - RandomPlayer: Uniformly random legal moves from a seeded RNG
//! - CliPlayer: Interactive console player
//!
//! [`play_round`] drives a [`GameEngine`] to the end of a round with two players.

use crate::core::{BoardState, GameEngine, GameStatus, Mark, Move};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Choosing a move for its mark when it is its turn
/// - Reacting to moves and round results (display, logging)
pub trait Player {
    /// Mark this player places.
    fn mark(&self) -> Mark;

    /// Choose the next move on `board`. The returned move is validated by the
    /// engine, not trusted.
    fn select_move(&mut self, board: &BoardState) -> anyhow::Result<Move>;

    /// Inform the player that `mark` was placed at `mv`.
    fn handle_move(&mut self, _mark: Mark, _mv: Move, _board: &BoardState) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player that the round ended.
    fn handle_outcome(&mut self, _engine: &GameEngine) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Play one round on `engine` until it is won or drawn.
///
/// The engine's side to move picks which player is asked; both players are
/// told about every move and about the final result.
pub fn play_round(
    engine: &mut GameEngine,
    a: &mut dyn Player,
    b: &mut dyn Player,
) -> anyhow::Result<GameStatus> {
    if a.mark() == b.mark() {
        return Err(anyhow::anyhow!("both players use mark {}", a.mark()));
    }
    log::info!("round started, {} to move", engine.to_move());

    while !engine.status().is_over() {
        let mover = engine.to_move();
        let mv = if a.mark() == mover {
            a.select_move(engine.board())?
        } else {
            b.select_move(engine.board())?
        };
        engine.play(mv).map_err(|e| anyhow::anyhow!(e))?;
        a.handle_move(mover, mv, engine.board())?;
        b.handle_move(mover, mv, engine.board())?;
    }

    log::info!(
        "round finished after {} moves: {:?}",
        engine.moves_played(),
        engine.status()
    );
    a.handle_outcome(engine)?;
    b.handle_outcome(engine)?;
    Ok(engine.status())
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

pub mod random;
pub use random::RandomPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_move, run_session, CliPlayer, InputError, SessionSummary};
