// Exhaustive minimax search for the AI's move.
// Uses no_std and avoids heap allocations.

use crate::core::{
    board::BoardState,
    common::{Cell, Mark, Move},
    config::{CELLS, DRAW_SCORE, LOSS_SCORE, WIN_SCORE},
};

/// Result of a position from the searching side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    AiWin,
    OpponentWin,
    Draw,
    Ongoing,
}

/// Perfect-play move selection for a fixed pair of marks.
///
/// Every call searches the full remaining game tree, with no depth limit,
/// pruning or caching, so the chosen move is optimal against any reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSearch {
    ai: Mark,
    opponent: Mark,
}

impl MoveSearch {
    /// Search on behalf of `ai`; the opponent plays the complementary mark.
    pub const fn new(ai: Mark) -> Self {
        Self {
            ai,
            opponent: ai.opponent(),
        }
    }

    pub fn ai_mark(&self) -> Mark {
        self.ai
    }

    pub fn opponent_mark(&self) -> Mark {
        self.opponent
    }

    /// Classify `board`, checking the AI's win before the opponent's and both
    /// before a full board.
    pub fn outcome(&self, board: &BoardState) -> Outcome {
        if board.has_won(self.ai) {
            Outcome::AiWin
        } else if board.has_won(self.opponent) {
            Outcome::OpponentWin
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Best move for the AI on `board`, or `None` when the position is already
    /// decided and there is nothing to choose.
    ///
    /// Candidates are tried in row-major order and only a strictly better
    /// score replaces the current best, so the first optimal cell wins.
    /// The caller's board is never modified.
    pub fn best_move(&self, board: &BoardState) -> Option<Move> {
        if self.outcome(board) != Outcome::Ongoing {
            return None;
        }
        let mut scratch = BoardState::from(board.snapshot());
        let mut nodes = 0u64;
        let mut best: Option<(Move, i32)> = None;

        for mv in CELLS {
            if !scratch.cell(mv).is_empty() {
                continue;
            }
            scratch.place(mv, Cell::from(self.ai));
            let score = self.minimax(&mut scratch, false, &mut nodes);
            scratch.place(mv, Cell::Empty);

            log::trace!("candidate {} scored {}", mv, score);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            log::debug!(
                "{} chose {} with score {} after {} positions",
                self.ai,
                mv,
                score,
                nodes
            );
        }
        best.map(|(mv, _)| mv)
    }

    /// Minimax value of `board` with the given side to move.
    pub fn score(&self, board: &BoardState, ai_to_move: bool) -> i32 {
        let mut scratch = BoardState::from(board.snapshot());
        let mut nodes = 0u64;
        self.minimax(&mut scratch, ai_to_move, &mut nodes)
    }

    // Recursive evaluator over one shared scratch board. Every placed mark is
    // cleared again before the next sibling is tried.
    fn minimax(&self, board: &mut BoardState, maximizing: bool, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if board.has_won(self.ai) {
            return WIN_SCORE;
        }
        if board.has_won(self.opponent) {
            return LOSS_SCORE;
        }
        if board.is_full() {
            return DRAW_SCORE;
        }

        let (mark, mut best) = if maximizing {
            (self.ai, i32::MIN)
        } else {
            (self.opponent, i32::MAX)
        };
        for mv in CELLS {
            if !board.cell(mv).is_empty() {
                continue;
            }
            board.place(mv, Cell::from(mark));
            let score = self.minimax(board, !maximizing, nodes);
            board.place(mv, Cell::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}
