//! Material-plus-pawn-structure evaluation.

use chess_core::{Board, Color, PieceKind, Square};

/// Scores are in tenths of a pawn, positive favouring white.
pub type Score = i32;

/// Material values, indexed in `PieceKind` order.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [Score; 6] = [10, 30, 30, 50, 90, 1000];

/// Bonus for a pawn standing on one of its favoured rows.
const PAWN_ROW_BONUS: Score = 5;

/// Bonus for a pawn on one of the four central squares.
const CENTER_PAWN_BONUS: Score = 5;

const CENTER: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];

fn pawn_rows(c: Color) -> [u8; 2] {
    match c {
        Color::White => [6, 4],
        Color::Black => [1, 3],
    }
}

#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind as usize]
}

/// Static score of the position. Not exact; only needs to order positions
/// sensibly for the search.
pub fn evaluate(board: &Board) -> Score {
    let mut score: Score = 0;

    for c in [Color::White, Color::Black] {
        let sign = if c == Color::White { 1 } else { -1 };
        for (s, pc) in board.pieces(c) {
            let mut v = piece_value(pc.kind);
            if pc.kind == PieceKind::Pawn {
                if pawn_rows(c).contains(&s.row) {
                    v += PAWN_ROW_BONUS;
                }
                if CENTER.contains(&s) {
                    v += CENTER_PAWN_BONUS;
                }
            }
            score += sign * v;
        }
    }

    score
}
