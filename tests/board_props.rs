use proptest::prelude::*;
use tictactoe::{BoardState, GameEngine, Mark, MoveSearch, CELLS, CELL_COUNT};

/// Replay `picks` as a legal game from X, skipping taken cells and stopping
/// once the round is decided.
fn play_out(picks: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new(Mark::X);
    for &i in picks {
        if engine.status().is_over() {
            break;
        }
        let mv = CELLS[i];
        if engine.board().cell(mv).is_empty() {
            engine.play(mv).unwrap();
        }
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn snapshot_roundtrip(picks in prop::collection::vec(0..CELL_COUNT, 0..12), extra in 0..CELL_COUNT) {
        let engine = play_out(&picks);
        let mut live = *engine.board();
        let snap = live.snapshot();
        let _ = live.apply_move(CELLS[extra].row, CELLS[extra].col, Mark::O);
        live.reset();
        prop_assert_eq!(BoardState::from(snap), *engine.board());
    }

    #[test]
    fn occupancy_adds_up(picks in prop::collection::vec(0..CELL_COUNT, 0..12)) {
        let engine = play_out(&picks);
        let board = engine.board();
        prop_assert_eq!(board.played_count() + board.empty_cells().len(), CELL_COUNT);
        prop_assert_eq!(board.is_full(), board.empty_cells().is_empty());
    }

    #[test]
    fn win_detection_is_pure(picks in prop::collection::vec(0..CELL_COUNT, 0..12)) {
        let engine = play_out(&picks);
        let board = *engine.board();
        for mark in [Mark::X, Mark::O] {
            let first = board.has_won(mark);
            prop_assert_eq!(board.has_won(mark), first);
            prop_assert_eq!(board.winning_line(mark).is_some(), first);
            prop_assert_eq!(board.winning_line(mark), board.winning_line(mark));
        }
        prop_assert_eq!(board, *engine.board());
    }
}

// Each case runs a full search, so fewer of them.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn best_move_only_picks_empty_cells(picks in prop::collection::vec(0..CELL_COUNT, 0..8)) {
        let engine = play_out(&picks);
        let board = engine.board();
        let search = MoveSearch::new(engine.to_move());
        match search.best_move(board) {
            Some(mv) => {
                prop_assert!(!engine.status().is_over());
                prop_assert!(board.empty_cells().contains(&mv));
            }
            None => prop_assert!(engine.status().is_over()),
        }
    }
}
