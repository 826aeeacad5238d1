//! Text form of squares and moves: `e2`, `e2 e4`.

use crate::error::{ChessError, Result};
use crate::types::{Move, Square};

impl Square {
    /// Parses a file letter and rank digit such as `e2`.
    pub fn from_algebraic(text: &str) -> Option<Square> {
        let b = text.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square::new(b'8' - r, f - b'a'))
    }
}

/// Parses `"<from> <to>"`, e.g. `"e2 e4"`. A compact `"e2e4"` is also accepted.
pub fn parse_move(text: &str) -> Result<Move> {
    let invalid = || ChessError::InvalidNotation(text.to_string());
    let parts: Vec<&str> = text.split_whitespace().collect();
    let (from, to) = match parts.as_slice() {
        [from, to] => (*from, *to),
        [both] if both.len() == 4 && both.is_ascii() => (&both[..2], &both[2..]),
        _ => return Err(invalid()),
    };
    let from = Square::from_algebraic(from).ok_or_else(invalid)?;
    let to = Square::from_algebraic(to).ok_or_else(invalid)?;
    Ok(Move::new(from, to))
}
