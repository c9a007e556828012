use crate::core::{BoardState, Mark, Move};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Player;

/// Opponent that plays a uniformly random empty cell.
pub struct RandomPlayer {
    mark: Mark,
    rng: SmallRng,
}

impl RandomPlayer {
    /// Reproducible player: the same seed yields the same choices.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self::with_rng(mark, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(mark: Mark, rng: SmallRng) -> Self {
        Self { mark, rng }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn select_move(&mut self, board: &BoardState) -> anyhow::Result<Move> {
        let moves = board.empty_cells();
        if moves.is_empty() {
            return Err(anyhow::anyhow!("no empty cell left for {}", self.mark));
        }
        Ok(moves[self.rng.random_range(0..moves.len())])
    }
}
