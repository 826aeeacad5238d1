//! Game-state detection over whole positions and short games
//!
//! Covers:
//! - Checkmate (scholar's mate, fool's mate played move by move)
//! - Stalemate
//! - Check that can be answered

use chess_core::{
    Board, Color, GameStatus, game_status, is_checkmate, is_in_check, is_stalemate, legal_moves,
    parse_move,
};

fn board(text: &str) -> Board {
    Board::from_ascii(text).expect("test diagram")
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_scholars_mate() {
    let mut pos = board(
        "
        r . b q k b . r
        p p p p . Q p p
        . . n . . n . .
        . . . . p . . .
        . . B . P . . .
        . . . . . . . .
        P P P P . P P P
        R N B . K . N R
        ",
    );

    assert!(is_in_check(&pos, Color::Black).unwrap());
    assert!(is_checkmate(&mut pos, Color::Black).unwrap());
    assert!(
        !is_stalemate(&mut pos, Color::Black).unwrap(),
        "Checkmate is not stalemate"
    );
    assert!(legal_moves(&mut pos, Color::Black).unwrap().is_empty());
}

#[test]
fn test_fools_mate_from_initial_position() {
    let mut pos = Board::new();
    for text in ["f2 f3", "e7 e5", "g2 g4", "d8 h4"] {
        let mv = parse_move(text).unwrap();
        pos.apply_move(mv.from, mv.to).unwrap();
    }

    assert_eq!(
        game_status(&mut pos, Color::White).unwrap(),
        GameStatus::Checkmate
    );
    assert_eq!(pos.history_len(), 4);

    // Taking the queen move back releases the mate.
    assert!(pos.undo());
    assert_eq!(
        game_status(&mut pos, Color::White).unwrap(),
        GameStatus::Ongoing
    );
}

#[test]
fn test_check_is_not_checkmate() {
    // Queen on h5 checks along the open e8-h5 diagonal; g7-g6 blocks.
    let mut pos = board(
        "
        r n b q k b n r
        p p p p p . p p
        . . . . . . . .
        . . . . . p . Q
        . . . . P . . .
        . . . . . . . .
        P P P P . P P P
        R N B . K B N R
        ",
    );

    assert!(is_in_check(&pos, Color::Black).unwrap());
    assert!(!is_checkmate(&mut pos, Color::Black).unwrap());
    assert_eq!(
        game_status(&mut pos, Color::Black).unwrap(),
        GameStatus::Check
    );
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, white queen on b6, white king on c7
    let mut pos = board(
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

    assert!(
        legal_moves(&mut pos, Color::Black).unwrap().is_empty(),
        "Stalemate position should have no legal moves"
    );
    assert!(
        !is_in_check(&pos, Color::Black).unwrap(),
        "Stalemate means king is not in check"
    );
    assert!(is_stalemate(&mut pos, Color::Black).unwrap());
    assert!(!is_stalemate(&mut pos, Color::White).unwrap());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let mut pos = board(
        "
        . . . . . . k .
        . . . . . . P .
        . . . . . . K .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    );

    assert!(is_stalemate(&mut pos, Color::Black).unwrap());
    assert!(!is_checkmate(&mut pos, Color::Black).unwrap());
    assert_eq!(
        game_status(&mut pos, Color::Black).unwrap(),
        GameStatus::Stalemate
    );
}
