use super::common::Move;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Score of a position the AI has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the opponent has won.
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

const fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col)
}

/// Every coordinate in row-major order. Move enumeration follows this order,
/// which is what makes tie-breaking between equal scores deterministic.
pub const CELLS: [Move; CELL_COUNT] = [
    mv(0, 0),
    mv(0, 1),
    mv(0, 2),
    mv(1, 0),
    mv(1, 1),
    mv(1, 2),
    mv(2, 0),
    mv(2, 1),
    mv(2, 2),
];

/// The eight winning lines in scan order: rows top to bottom, columns left
/// to right, then the main and anti diagonal.
pub const LINES: [[Move; 3]; 8] = [
    [mv(0, 0), mv(0, 1), mv(0, 2)],
    [mv(1, 0), mv(1, 1), mv(1, 2)],
    [mv(2, 0), mv(2, 1), mv(2, 2)],
    [mv(0, 0), mv(1, 0), mv(2, 0)],
    [mv(0, 1), mv(1, 1), mv(2, 1)],
    [mv(0, 2), mv(1, 2), mv(2, 2)],
    [mv(0, 0), mv(1, 1), mv(2, 2)],
    [mv(0, 2), mv(1, 1), mv(2, 0)],
];
