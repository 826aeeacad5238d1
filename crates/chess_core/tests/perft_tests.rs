use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Board, Color, perft};

const INITIAL: &str = "
    r n b q k b n r
    p p p p p p p p
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    P P P P P P P P
    R N B Q K B N R
";

// Rook-and-pawn endgame; at these depths no en passant, castling or
// promotion is reachable, so the published counts apply unchanged.
const ENDGAME: &str = "
    . . . . . . . .
    . . p . . . . .
    . . . p . . . .
    K P . . . . . r
    . R . . . p . k
    . . . . . . . .
    . . . . P . P .
    . . . . . . . .
";

#[test]
fn perft_known_counts() {
    let cases: Vec<(&str, &str, Vec<(u8, u64)>)> = vec![
        (
            "initial",
            INITIAL,
            vec![(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
        ),
        ("endgame", ENDGAME, vec![(1, 14), (2, 191)]),
    ];

    cases.par_iter().for_each(|(name, diagram, depths)| {
        let case_start = Instant::now();
        let mut total_nodes = 0u64;

        for (depth, expected) in depths {
            let mut board = Board::from_ascii(diagram).expect("valid diagram");
            let before = board.clone();
            let got = perft(&mut board, Color::White, *depth);
            assert!(
                got == *expected,
                "Perft mismatch for {} at depth {}: expected {}, got {}",
                name,
                depth,
                expected,
                got
            );
            assert_eq!(board, before, "perft must leave the board untouched");
            assert_eq!(board.history_len(), 0);
            total_nodes += got;
        }

        println!(
            "Case {} done: total nodes {}, elapsed {:.3?}",
            name,
            total_nodes,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_black_to_move_mirrors_white() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, Color::Black, 1), 20);
    assert_eq!(perft(&mut board, Color::Black, 2), 400);
    assert_eq!(perft(&mut board, Color::Black, 3), 8_902);
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&mut Board::new(), Color::White, 0), 1);
}
