//! Check, checkmate and stalemate detection.
//!
//! Queries take the board mutably only where they need to try moves out; every
//! trial runs inside a [`Trial`](crate::board::Trial) guard, so the board is
//! identical before and after each call.

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    error::{ChessError, Result},
    movegen::{DIAGONAL, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONAL, moves_for},
    types::*,
};

/// Game state from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// True iff some pseudo-legal move of the opponent lands on `c`'s king.
pub fn is_in_check(board: &Board, c: Color) -> Result<bool> {
    let ksq = board.king_square(c).ok_or(ChessError::KingNotFound(c))?;
    Ok(is_square_attacked(board, ksq, c.other()))
}

/// Whether a piece of color `by` could move onto `target`, looking outward
/// from the target along each piece's lines.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let hits = |s: Option<Square>, kinds: &[PieceKind]| {
        s.and_then(|s| board.piece_at(s))
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // A pawn of `by` captures one row ahead of itself, so it sits one row
    // behind the target from its own point of view.
    let back = -by.forward();
    for dc in [-1, 1] {
        if hits(target.offset(back, dc), &[PieceKind::Pawn]) {
            return true;
        }
    }

    for (dr, dc) in KNIGHT_DELTAS {
        if hits(target.offset(dr, dc), &[PieceKind::Knight]) {
            return true;
        }
    }

    for (dr, dc) in KING_DELTAS {
        if hits(target.offset(dr, dc), &[PieceKind::King]) {
            return true;
        }
    }

    // Sliding: bishop/rook/queen
    let rays = [
        (&DIAGONAL, [PieceKind::Bishop, PieceKind::Queen]),
        (&ORTHOGONAL, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (dirs, kinds) in rays {
        for &(dr, dc) in dirs {
            let mut cur = target;
            while let Some(next) = cur.offset(dr, dc) {
                if let Some(pc) = board.piece_at(next) {
                    if pc.color == by && kinds.contains(&pc.kind) {
                        return true;
                    }
                    break;
                }
                cur = next;
            }
        }
    }

    false
}

/// Plays `m` tentatively and reports whether `c`'s king is attacked after it.
pub fn leaves_king_in_check(board: &mut Board, c: Color, m: Move) -> Result<bool> {
    let trial = board.trial(m)?;
    is_in_check(&trial, c)
}

/// Pseudo-legal moves of `c` that do not leave its own king in check.
pub fn legal_moves(board: &mut Board, c: Color) -> Result<Vec<Move>> {
    let mut out = Vec::new();
    for m in moves_for(board, c) {
        if !leaves_king_in_check(board, c, m)? {
            out.push(m);
        }
    }
    Ok(out)
}

fn has_escape(board: &mut Board, c: Color) -> Result<bool> {
    for m in moves_for(board, c) {
        if !leaves_king_in_check(board, c, m)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// In check, and no pseudo-legal move gets out of it.
pub fn is_checkmate(board: &mut Board, c: Color) -> Result<bool> {
    if !is_in_check(board, c)? {
        return Ok(false);
    }
    Ok(!has_escape(board, c)?)
}

/// Not in check, and every move (if any) would walk into check.
pub fn is_stalemate(board: &mut Board, c: Color) -> Result<bool> {
    if is_in_check(board, c)? {
        return Ok(false);
    }
    Ok(!has_escape(board, c)?)
}

pub fn game_status(board: &mut Board, c: Color) -> Result<GameStatus> {
    let in_check = is_in_check(board, c)?;
    let can_move = has_escape(board, c)?;
    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Ongoing,
    })
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
