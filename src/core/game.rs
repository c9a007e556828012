use crate::core::{
    board::BoardState,
    common::{BoardError, Mark, Move},
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Per-round state machine: enforces turn alternation on top of
/// [`BoardState`] and keeps terminal states absorbing until [`reset`].
///
/// [`reset`]: GameEngine::reset
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: BoardState,
    to_move: Mark,
    status: GameStatus,
}

impl GameEngine {
    /// Start an empty round in which `first` moves first.
    pub fn new(first: Mark) -> Self {
        Self {
            board: BoardState::new(),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Mark whose turn it is. Unchanged once the round is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves_played(&self) -> usize {
        self.board.played_count()
    }

    /// Line to highlight when the round was won.
    pub fn winning_line(&self) -> Option<[Move; 3]> {
        match self.status {
            GameStatus::Won(mark) => self.board.winning_line(mark),
            _ => None,
        }
    }

    /// Play `mv` for the side to move and return the resulting status.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, BoardError> {
        if self.status.is_over() {
            return Err(BoardError::GameOver);
        }
        let mover = self.to_move;
        self.board.try_apply_move(mv.row, mv.col, mover)?;
        log::debug!("{} played {}", mover, mv);

        if self.board.has_won(mover) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mover.opponent();
        }
        Ok(self.status)
    }

    /// Clear the board and start a new round with `first` to move.
    pub fn reset(&mut self, first: Mark) {
        self.board.reset();
        self.to_move = first;
        self.status = GameStatus::InProgress;
    }
}
