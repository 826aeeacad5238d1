use super::*;
use chess_core::{legal_moves, mv, moves_for, Square};

fn board(text: &str) -> Board {
    Board::from_ascii(text).expect("test diagram")
}

fn back_rank_mate_in_one() -> Board {
    // Black rook a8-a1 mates the white king boxed in on h1.
    board(
        "
        r . . . . . . k
        . . . . . p p p
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . P P
        . . . . . . . K
        ",
    )
}

#[test]
fn test_depth_zero_is_static_eval() {
    let mut b = back_rank_mate_in_one();
    let before = b.clone();
    let mut searcher = Searcher::default();
    let score = searcher.minimax(&mut b, 0, true, -INFINITY, INFINITY);
    assert_eq!(score, evaluate(&before));
    assert_eq!(searcher.stats().nodes, 1);
    assert_eq!(searcher.stats().max_ply, 0);
    assert_eq!(b.history_len(), 0, "no move applied at depth 0");
}

#[test]
fn test_minimax_respects_depth() {
    for depth in 1..=3u8 {
        let mut b = Board::new();
        let mut searcher = Searcher::default();
        searcher.minimax(&mut b, depth, true, -INFINITY, INFINITY);
        assert_eq!(searcher.stats().max_ply, depth, "depth {depth}");
        assert_eq!(b, Board::new(), "board restored after depth {depth}");
        assert_eq!(b.history_len(), 0);
    }
}

#[test]
fn test_root_search_respects_depth() {
    let mut b = Board::new();
    let mut searcher = Searcher::default();
    let outcome = searcher.search_root(&mut b, 2, Color::White);
    assert!(outcome.best_move.is_some());
    assert_eq!(searcher.stats().max_ply, 2);
    assert_eq!(outcome.nodes, searcher.stats().nodes);
    assert_eq!(b, Board::new());
}

#[test]
fn test_pruning_visits_fewer_nodes_than_full_width() {
    // Full-width depth-2 tree from the initial position has 1 + 20 + 400 nodes.
    let mut b = Board::new();
    let mut searcher = Searcher::default();
    searcher.minimax(&mut b, 2, true, -INFINITY, INFINITY);
    assert!(searcher.stats().nodes < 421, "nodes = {}", searcher.stats().nodes);

    // With a window that can never close, nothing is cut.
    let mut wide = Searcher::default();
    wide.minimax(&mut b, 1, true, -INFINITY, INFINITY);
    assert_eq!(wide.stats().nodes, 21);
}

#[test]
fn test_finds_back_rank_mate() {
    let mut b = back_rank_mate_in_one();
    let before = b.clone();
    let best = find_best_move(&mut b, 2, Color::Black);
    assert_eq!(best, Some(mv((0, 0), (7, 0))));
    assert_eq!(b, before);

    let mut searcher = Searcher::default();
    let outcome = searcher.search_root(&mut b, 2, Color::Black);
    assert!(outcome.score <= -MATE_SCORE, "mate score, got {}", outcome.score);
}

#[test]
fn test_takes_hanging_queen() {
    let mut b = board(
        "
        . . . . k . . .
        . . . . . . . .
        . . . . . . . .
        . . . q . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . R K . . .
        ",
    );
    assert_eq!(find_best_move(&mut b, 1, Color::White), Some(mv((7, 3), (3, 3))));
    assert_eq!(find_best_move(&mut b, 2, Color::White), Some(mv((7, 3), (3, 3))));
}

#[test]
fn test_black_minimises() {
    let mut b = board(
        "
        . . . . k . . .
        . . . . r . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . Q . . .
        . . . . . . . .
        . . K . . . . .
        ",
    );
    assert_eq!(find_best_move(&mut b, 1, Color::Black), Some(mv((1, 4), (5, 4))));
}

#[test]
fn test_best_move_never_exposes_king() {
    let positions = [
        // Knight pinned against the king by a rook.
        "
        . . . . r . . k
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . b . . . . .
        . . . . . . . .
        . . . . N . . .
        . . . . K . . .
        ",
        // King in check from a rook with a free-looking bishop capture elsewhere.
        "
        . . . . k . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        b . . . . . . .
        . . . . . . . .
        r . . . K . . B
        ",
    ];
    for text in positions {
        let mut b = board(text);
        for depth in 1..=3 {
            let best = find_best_move(&mut b, depth, Color::White).expect("has a move");
            let legal = legal_moves(&mut b, Color::White).unwrap();
            assert!(legal.contains(&best), "depth {depth}: {best} leaves king in check");
        }
    }
}

#[test]
fn test_no_move_when_mated_or_stalemated() {
    let mut mated = board(
        "
        k . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . P P
        r . . . . . . K
        ",
    );
    assert_eq!(find_best_move(&mut mated, 2, Color::White), None);
    assert_eq!(iterative_deepening(&mut mated, 3, Color::White), None);

    let mut stalemated = board(
        "
        k . . . . . . .
        . . K . . . . .
        . Q . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    );
    assert_eq!(find_best_move(&mut stalemated, 2, Color::Black), None);
}

#[test]
fn test_terminal_scoring_modes() {
    // White to move is checkmated: every move is filtered out.
    let mated = board(
        "
        k . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . P P
        r . . . . . . K
        ",
    );

    let mut b = mated.clone();
    let rigorous = Searcher::new(TerminalScoring::Rigorous).minimax(&mut b, 2, true, -INFINITY, INFINITY);
    assert_eq!(rigorous, -(MATE_SCORE + 2));

    let mut b = mated.clone();
    let leafy = Searcher::new(TerminalScoring::Static).minimax(&mut b, 2, true, -INFINITY, INFINITY);
    assert_eq!(leafy, evaluate(&mated));

    // Stalemate scores as a draw when rigorous.
    let mut b = board(
        "
        k . . . . . . .
        . . K . . . . .
        . Q . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    );
    assert_eq!(minimax(&mut b, 3, false, -INFINITY, INFINITY), 0);
}

#[test]
fn test_prefers_faster_mate() {
    let mut b = back_rank_mate_in_one();
    let mut quick = Searcher::default();
    let at_two = quick.search_root(&mut b, 2, Color::Black).score;
    let mut deeper = Searcher::default();
    let at_four = deeper.search_root(&mut b, 4, Color::Black).score;
    assert!(at_two <= -MATE_SCORE && at_four <= -MATE_SCORE);
    // Same mate, found with more depth left in the deeper search.
    assert!(at_four < at_two);
}

#[test]
fn test_iterative_deepening_matches_final_depth() {
    let mut b = back_rank_mate_in_one();
    for max_depth in 1..=3 {
        assert_eq!(
            iterative_deepening(&mut b, max_depth, Color::Black),
            find_best_move(&mut b, max_depth, Color::Black)
        );
    }
    assert_eq!(b.history_len(), 0);
}

#[test]
fn test_iterative_deepening_at_depth_zero_searches_nothing() {
    let mut b = Board::new();
    assert_eq!(iterative_deepening(&mut b, 0, Color::White), None);

    let mut searcher = Searcher::default();
    let outcome = searcher.iterative_deepening(&mut b, 0, Color::Black);
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.depth, 0);
    assert_eq!(searcher.stats().nodes, 0);
    assert_eq!(b, Board::new());
}

#[test]
fn test_search_visits_only_generated_moves() {
    let mut b = Board::new();
    let best = find_best_move(&mut b, 1, Color::White).unwrap();
    assert!(moves_for(&b, Color::White).contains(&best));
    assert!(b.piece_at(Square::new(best.from.row, best.from.col)).is_some());
}
