//! Board state: the 3x3 grid of marks and the queries run against it.

use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{BoardError, Cell, Mark, Move};
use crate::core::config::{BOARD_SIZE, CELLS, LINES};

/// Raw grid contents, indexed `[row][col]`.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Occupancy of the 3x3 grid.
///
/// The board only knows which cells hold which mark. Turn order belongs to
/// the caller (see [`GameEngine`](crate::core::game::GameEngine)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BoardState {
    grid: Grid,
}

impl BoardState {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a coordinate without touching the board.
    pub fn check_move(&self, row: usize, col: usize) -> Result<Move, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if !self.grid[row][col].is_empty() {
            return Err(BoardError::Occupied { row, col });
        }
        Ok(Move::new(row, col))
    }

    /// Place `mark` at (row, col), reporting why the move was rejected.
    pub fn try_apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<Move, BoardError> {
        let mv = self.check_move(row, col)?;
        self.grid[row][col] = Cell::from(mark);
        Ok(mv)
    }

    /// Place `mark` at (row, col). Returns `false` and leaves the board
    /// untouched when the cell is out of range or already taken.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        self.try_apply_move(row, col, mark).is_ok()
    }

    /// `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|c| !c.is_empty())
    }

    /// `true` when any row, column or diagonal is entirely `mark`.
    pub fn has_won(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    /// First line entirely held by `mark`, scanning rows, then columns, then
    /// the two diagonals.
    pub fn winning_line(&self, mark: Mark) -> Option<[Move; 3]> {
        let cell = Cell::from(mark);
        LINES
            .iter()
            .find(|line| line.iter().all(|m| self.cell(*m) == cell))
            .copied()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        CELLS.iter().copied().filter(|m| self.cell(*m).is_empty()).collect()
    }

    /// Number of non-empty cells.
    pub fn played_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Contents of a cell. `mv` must be in bounds.
    pub fn cell(&self, mv: Move) -> Cell {
        self.grid[mv.row][mv.col]
    }

    /// Read-only view of the whole grid for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Independent copy of the grid; later moves on this board do not affect it.
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.grid = Grid::default();
    }

    // Scratch-only mutation used by the search. Bypasses validation so a
    // placed mark can be taken back.
    pub(crate) fn place(&mut self, mv: Move, cell: Cell) {
        self.grid[mv.row][mv.col] = cell;
    }
}

impl From<Grid> for BoardState {
    fn from(grid: Grid) -> Self {
        BoardState { grid }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0   1   2")?;
        writeln!(f, "  -------------")?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "{} |", r)?;
            for cell in row {
                write!(f, " {} |", cell.symbol())?;
            }
            writeln!(f)?;
            writeln!(f, "  -------------")?;
        }
        Ok(())
    }
}
