//! Two independent answers to "may `side` play this move?".
//!
//! [`PseudoLegalRules`] asks the move generator, so it accepts exactly what
//! search explores. [`StrictInputRules`] re-derives each piece's geometry
//! from the two squares alone and is what user input goes through. The two
//! are kept separate on purpose and neither checks king safety.

use crate::{
    board::Board,
    error::{ChessError, Result},
    movegen::moves_from,
    notation::parse_move,
    types::*,
};

/// A legality check for a single move by `side`.
pub trait MoveRules {
    fn name(&self) -> &str;

    /// `Ok(())` if the move is acceptable, otherwise the reason it is not.
    fn check(&self, board: &Board, side: Color, mv: Move) -> Result<()>;
}

/// Shared source-square checks: on the board, occupied, and owned by `side`.
fn check_source(board: &Board, side: Color, mv: Move) -> Result<Piece> {
    for s in [mv.from, mv.to] {
        if !s.in_bounds() {
            return Err(ChessError::InvalidCoordinate {
                row: s.row,
                col: s.col,
            });
        }
    }
    let pc = board
        .piece_at(mv.from)
        .ok_or(ChessError::EmptySource(mv.from))?;
    if pc.color != side {
        return Err(ChessError::WrongColor {
            square: mv.from,
            side,
        });
    }
    Ok(pc)
}

/// Accepts a move iff the engine's generator produces it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalRules;

impl MoveRules for PseudoLegalRules {
    fn name(&self) -> &str {
        "pseudo-legal"
    }

    fn check(&self, board: &Board, side: Color, mv: Move) -> Result<()> {
        check_source(board, side, mv)?;
        if moves_from(board, mv.from).contains(&mv) {
            Ok(())
        } else {
            Err(ChessError::IllegalMove(mv))
        }
    }
}

/// Geometry checks for moves typed by a player.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictInputRules;

impl StrictInputRules {
    fn pawn(board: &Board, side: Color, mv: Move) -> bool {
        let dir = side.forward();
        let (sr, sc) = (mv.from.row as i8, mv.from.col as i8);
        let (er, ec) = (mv.to.row as i8, mv.to.col as i8);
        let target_empty = board.piece_at(mv.to).is_none();

        if sc == ec && target_empty && er == sr + dir {
            return true;
        }
        if sc == ec && target_empty && er == sr + 2 * dir && mv.from.row == side.pawn_row() {
            return mv
                .from
                .offset(dir, 0)
                .is_some_and(|mid| board.piece_at(mid).is_none());
        }
        (ec - sc).abs() == 1 && er == sr + dir && !target_empty
    }

    /// Every cell strictly between the two squares is empty.
    fn path_clear(board: &Board, mv: Move) -> bool {
        let dr = (mv.to.row as i8 - mv.from.row as i8).signum();
        let dc = (mv.to.col as i8 - mv.from.col as i8).signum();
        let mut cur = mv.from;
        while let Some(next) = cur.offset(dr, dc) {
            if next == mv.to {
                return true;
            }
            if board.piece_at(next).is_some() {
                return false;
            }
            cur = next;
        }
        false
    }

    fn rook(board: &Board, mv: Move) -> bool {
        (mv.from.row == mv.to.row || mv.from.col == mv.to.col) && Self::path_clear(board, mv)
    }

    fn bishop(board: &Board, mv: Move) -> bool {
        let dr = mv.from.row.abs_diff(mv.to.row);
        let dc = mv.from.col.abs_diff(mv.to.col);
        dr == dc && Self::path_clear(board, mv)
    }
}

impl MoveRules for StrictInputRules {
    fn name(&self) -> &str {
        "strict-input"
    }

    fn check(&self, board: &Board, side: Color, mv: Move) -> Result<()> {
        let pc = check_source(board, side, mv)?;
        if mv.from == mv.to {
            return Err(ChessError::IllegalMove(mv));
        }
        if board.piece_at(mv.to).is_some_and(|t| t.color == side) {
            return Err(ChessError::IllegalMove(mv));
        }

        let dr = mv.from.row.abs_diff(mv.to.row);
        let dc = mv.from.col.abs_diff(mv.to.col);
        let ok = match pc.kind {
            PieceKind::Pawn => Self::pawn(board, side, mv),
            PieceKind::Rook => Self::rook(board, mv),
            PieceKind::Knight => matches!((dr, dc), (2, 1) | (1, 2)),
            PieceKind::Bishop => Self::bishop(board, mv),
            PieceKind::Queen => Self::rook(board, mv) || Self::bishop(board, mv),
            PieceKind::King => dr.max(dc) == 1,
        };
        if ok {
            Ok(())
        } else {
            Err(ChessError::IllegalMove(mv))
        }
    }
}

/// Parses move text and runs it through `rules`.
pub fn validate_input(board: &Board, text: &str, side: Color, rules: &dyn MoveRules) -> Result<Move> {
    let mv = parse_move(text)?;
    rules.check(board, side, mv)?;
    Ok(mv)
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
