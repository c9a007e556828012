use crate::core::{BoardState, Mark, Move, MoveSearch};

use super::Player;

/// Perfect AI player backed by [`MoveSearch`].
pub struct AiPlayer {
    search: MoveSearch,
}

impl AiPlayer {
    pub fn new(mark: Mark) -> Self {
        Self {
            search: MoveSearch::new(mark),
        }
    }

    pub fn search(&self) -> &MoveSearch {
        &self.search
    }
}

impl Player for AiPlayer {
    fn mark(&self) -> Mark {
        self.search.ai_mark()
    }

    fn select_move(&mut self, board: &BoardState) -> anyhow::Result<Move> {
        self.search
            .best_move(board)
            .ok_or_else(|| anyhow::anyhow!("no legal move available for {}", self.mark()))
    }
}
