use tictactoe::{BoardError, BoardState, Cell, Grid, Mark, Move, MoveSearch, DRAW_SCORE};

fn board_from(rows: [&str; 3]) -> BoardState {
    let mut grid = Grid::default();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            grid[r][c] = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Empty,
            };
        }
    }
    BoardState::from(grid)
}

#[test]
fn test_apply_move_rejects_out_of_bounds() {
    let mut board = BoardState::new();
    assert!(!board.apply_move(3, 0, Mark::X));
    assert!(!board.apply_move(0, 3, Mark::X));
    assert!(!board.apply_move(usize::MAX, 1, Mark::O));
    assert_eq!(board, BoardState::new());
    assert_eq!(
        board.try_apply_move(1, 5, Mark::X).unwrap_err(),
        BoardError::OutOfBounds { row: 1, col: 5 }
    );
}

#[test]
fn test_apply_move_rejects_occupied_cell() {
    let mut board = BoardState::new();
    assert!(board.apply_move(1, 1, Mark::X));
    assert!(!board.apply_move(1, 1, Mark::O));
    assert_eq!(board.cell(Move::new(1, 1)), Cell::X);
    assert_eq!(
        board.check_move(1, 1).unwrap_err(),
        BoardError::Occupied { row: 1, col: 1 }
    );
    assert_eq!(board.played_count(), 1);
}

#[test]
fn test_is_full() {
    let mut board = BoardState::new();
    assert!(!board.is_full());
    for (i, mv) in board.empty_cells().into_iter().enumerate() {
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        assert!(board.apply_move(mv.row, mv.col, mark));
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_has_won_every_line() {
    let rows = [
        ["XXX", "...", "..."],
        ["...", "XXX", "..."],
        ["...", "...", "XXX"],
        ["X..", "X..", "X.."],
        [".X.", ".X.", ".X."],
        ["..X", "..X", "..X"],
        ["X..", ".X.", "..X"],
        ["..X", ".X.", "X.."],
    ];
    for r in rows {
        let board = board_from(r);
        assert!(board.has_won(Mark::X), "{:?}", r);
        assert!(!board.has_won(Mark::O), "{:?}", r);
    }
    assert!(!board_from(["XX.", "X.O", ".OO"]).has_won(Mark::X));
}

#[test]
fn test_winning_line_scan_order() {
    // Row 0 and column 0 both complete: the row comes first.
    let board = board_from(["XXX", "XO.", "XO."]);
    assert_eq!(
        board.winning_line(Mark::X),
        Some([Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)])
    );

    // Column 2 beats both diagonals.
    let board = board_from(["O.O", ".OO", "O.O"]);
    assert_eq!(
        board.winning_line(Mark::O),
        Some([Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)])
    );

    // Main diagonal before anti diagonal.
    let board = board_from(["X.X", ".X.", "X.X"]);
    assert_eq!(
        board.winning_line(Mark::X),
        Some([Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)])
    );

    assert_eq!(board.winning_line(Mark::O), None);
}

#[test]
fn test_empty_cells_row_major() {
    let board = board_from(["X.O", ".X.", "O.."]);
    assert_eq!(
        board.empty_cells(),
        vec![
            Move::new(0, 1),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 1),
            Move::new(2, 2),
        ]
    );
}

#[test]
fn test_snapshot_is_independent() {
    let mut board = board_from(["X..", ".O.", "..."]);
    let snap = board.snapshot();
    assert!(board.apply_move(2, 2, Mark::X));
    board.reset();

    let restored = BoardState::from(snap);
    assert_eq!(restored, board_from(["X..", ".O.", "..."]));
    assert_eq!(restored.played_count(), 2);
}

#[test]
fn test_reset_clears_board() {
    let mut board = board_from(["XOX", "OXO", "OXO"]);
    board.reset();
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().len(), 9);
    assert!(board.grid().iter().flatten().all(|c| c.is_empty()));
}

#[test]
fn test_full_board_without_winner() {
    let board = board_from(["XOX", "XOO", "OXX"]);
    assert!(board.is_full());
    assert!(!board.has_won(Mark::X));
    assert!(!board.has_won(Mark::O));
    let search = MoveSearch::new(Mark::O);
    assert_eq!(search.score(&board, true), DRAW_SCORE);
    assert_eq!(search.score(&board, false), DRAW_SCORE);
    assert_eq!(search.best_move(&board), None);
}

#[test]
fn test_display_renders_grid() {
    let board = board_from(["X.O", "...", "..."]);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "   0   1   2");
    assert_eq!(lines[1], "  -------------");
    assert_eq!(lines[2], "0 | X |   | O |");
    assert_eq!(lines.len(), 8);
}
