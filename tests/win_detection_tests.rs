//! Win detection over the full space of boards and play orders.

use proptest::prelude::*;

use rust_ttt::{Board, Cell, Game, Mark, Status};

/// The 8 triples a game can be won on, in the order the engine scans them.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Test that every triple, filled with either mark on an otherwise empty
/// board, is reported as a win on exactly that triple.
#[test]
fn test_every_triple_wins_for_both_marks() {
    for triple in TRIPLES {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::default();
            for index in triple {
                board.set(Cell::new(index), mark);
            }

            let win = board.winner().unwrap();
            assert_eq!(win.mark, mark);
            assert_eq!(win.cells.map(|cell| cell.index()), triple);
        }
    }
}

/// Test that near-misses are not reported: two of a triple plus the
/// opposing mark on the third cell.
#[test]
fn test_blocked_triples_are_not_wins() {
    for triple in TRIPLES {
        let mut board = Board::default();
        board.set(Cell::new(triple[0]), Mark::X);
        board.set(Cell::new(triple[1]), Mark::X);
        board.set(Cell::new(triple[2]), Mark::O);

        assert!(board.winner().is_none(), "triple {:?} should be blocked", triple);
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(
        proptest::option::of(prop_oneof![Just(Mark::X), Just(Mark::O)]),
        Cell::COUNT,
    )
    .prop_map(|marks| {
        let mut board = Board::default();
        for (index, mark) in marks.into_iter().enumerate() {
            if let Some(mark) = mark {
                board.set(Cell::new(index), mark);
            }
        }
        board
    })
}

proptest! {
    /// The reported win is always the first uniformly-occupied triple in
    /// scan order, and `None` means no triple is uniform at all.
    #[test]
    fn prop_winner_agrees_with_triple_scan(board in arb_board()) {
        let expected = TRIPLES.iter().find_map(|&triple| {
            let marks: Vec<_> = triple.iter().map(|&i| board.get(Cell::new(i))).collect();
            match (marks[0], marks[1], marks[2]) {
                (Some(a), Some(b), Some(c)) if a == b && b == c => Some((a, triple)),
                _ => None,
            }
        });

        match (board.winner(), expected) {
            (Some(win), Some((mark, triple))) => {
                prop_assert_eq!(win.mark, mark);
                prop_assert_eq!(win.cells.map(|cell| cell.index()), triple);
            }
            (None, None) => {}
            (got, want) => prop_assert!(false, "got {:?}, expected {:?}", got, want),
        }
    }

    /// Any full permutation of the nine cells, played through a session,
    /// alternates marks, grows history by one per accepted ply, and ends in
    /// a win or a draw.
    #[test]
    fn prop_random_playout_ends_in_win_or_draw(
        order in Just((0..Cell::COUNT).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut game = Game::new();
        let mut placed = 0;

        for &index in &order {
            let cell = Cell::new(index);
            let expected_mark = game.next_mark();

            if game.apply_move(cell) {
                placed += 1;
                prop_assert_eq!(game.history_len(), placed + 1);
                prop_assert_eq!(game.board().get(cell), Some(expected_mark));
            } else {
                // The cells are distinct, so a refusal can only mean the
                // game is already won.
                prop_assert!(game.winning_line().is_some());
            }
        }

        prop_assert!(game.status().is_over());
        if game.winning_line().is_none() {
            prop_assert_eq!(placed, Cell::COUNT);
            prop_assert_eq!(game.status(), Status::Draw);
        }
    }
}
