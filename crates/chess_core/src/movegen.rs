use crate::{board::Board, types::*};

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Every pseudo-legal move for `c`, freshly allocated.
pub fn moves_for(board: &Board, c: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    moves_into(board, c, &mut out);
    out
}

/// Pseudo-legal moves for `c` into a reused buffer. Pieces are visited in
/// row-major order; the mover's own king safety is not considered.
pub fn moves_into(board: &Board, c: Color, out: &mut Vec<Move>) {
    out.clear();
    for (from, pc) in board.pieces(c) {
        gen_piece(board, from, pc, out);
    }
}

/// Pseudo-legal moves of whatever stands on `from`.
pub fn moves_from(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = board.piece_at(from) {
        gen_piece(board, from, pc, &mut out);
    }
    out
}

fn gen_piece(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_step(board, from, pc.color, out, &KNIGHT_DELTAS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &DIAGONAL),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ORTHOGONAL),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, out, &ORTHOGONAL);
            gen_slider(board, from, pc.color, out, &DIAGONAL);
        }
        PieceKind::King => gen_step(board, from, pc.color, out, &KING_DELTAS),
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1, then forward 2 from the start row through an empty cell
    if let Some(to) = from.offset(dir, 0)
        && board.piece_at(to).is_none()
    {
        out.push(Move::new(from, to));

        if from.row == c.pawn_row()
            && let Some(to2) = from.offset(2 * dir, 0)
            && board.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.piece_at(to)
            && target.color != c
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_step(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
