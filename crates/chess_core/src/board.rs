use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};
use crate::types::*;

/// Cell contents indexed `[row][col]`.
pub type Grid = [[Option<Piece>; 8]; 8];

/// How the board remembers moves so they can be taken back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndoStrategy {
    /// Record `(from, to, captured)` and reverse the relocation.
    #[default]
    Paired,
    /// Record the whole grid before the move and restore it.
    Snapshot,
}

#[derive(Clone, Debug)]
enum Undo {
    Paired {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    Snapshot(Grid),
}

#[derive(Clone, Debug)]
pub struct Board {
    cells: Grid,
    history: Vec<Undo>,
    strategy: UndoStrategy,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

fn initial_grid() -> Grid {
    let mut cells: Grid = [[None; 8]; 8];
    for (c, &kind) in BACK_RANK.iter().enumerate() {
        cells[0][c] = Some(Piece::new(Color::Black, kind));
        cells[1][c] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        cells[6][c] = Some(Piece::new(Color::White, PieceKind::Pawn));
        cells[7][c] = Some(Piece::new(Color::White, kind));
    }
    cells
}

fn check_bounds(s: Square) -> Result<()> {
    if s.in_bounds() {
        Ok(())
    } else {
        Err(ChessError::InvalidCoordinate {
            row: s.row,
            col: s.col,
        })
    }
}

impl Board {
    /// Standard initial position with paired undo records.
    pub fn new() -> Self {
        Self::with_strategy(UndoStrategy::Paired)
    }

    pub fn with_strategy(strategy: UndoStrategy) -> Self {
        Board {
            cells: initial_grid(),
            history: Vec::new(),
            strategy,
        }
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            history: Vec::new(),
            strategy: UndoStrategy::Paired,
        }
    }

    /// Parses an 8-line diagram, row 0 first. `.` is an empty cell,
    /// uppercase letters are white pieces and lowercase are black.
    /// Whitespace inside a line is ignored, as are blank lines.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidBoardText(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(ChessError::InvalidBoardText(format!(
                    "row {r} has {} cells",
                    cells.len()
                )));
            }
            for (c, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_char(ch).ok_or_else(|| {
                    ChessError::InvalidBoardText(format!("unknown piece {ch:?} in row {r}"))
                })?;
                board.cells[r][c] = Some(piece);
            }
        }
        Ok(board)
    }

    /// Restores the initial position and forgets every recorded move.
    /// The undo strategy is kept.
    pub fn reset(&mut self) {
        self.cells = initial_grid();
        self.history.clear();
    }

    pub fn undo_strategy(&self) -> UndoStrategy {
        self.strategy
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Out-of-bounds squares read as empty.
    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        if !s.in_bounds() {
            return None;
        }
        self.cells[s.row as usize][s.col as usize]
    }

    /// Places or clears a piece for position set-up. Not recorded in history.
    pub fn set_piece(&mut self, s: Square, pc: Option<Piece>) -> Result<()> {
        check_bounds(s)?;
        self.cells[s.row as usize][s.col as usize] = pc;
        Ok(())
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    /// Pieces of one color in row-major order.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8)
            .flat_map(|r| (0..8u8).map(move |col| Square::new(r, col)))
            .filter_map(move |s| match self.piece_at(s) {
                Some(pc) if pc.color == c => Some((s, pc)),
                _ => None,
            })
    }

    /// Moves the piece on `from` to `to`, replacing whatever stood there,
    /// and returns the captured piece. Geometry is not checked here; the
    /// only requirements are in-bounds squares and an occupied `from`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>> {
        check_bounds(from)?;
        check_bounds(to)?;
        let moved = self.piece_at(from).ok_or(ChessError::EmptySource(from))?;
        let captured = self.piece_at(to);

        let record = match self.strategy {
            UndoStrategy::Paired => Undo::Paired { from, to, captured },
            UndoStrategy::Snapshot => Undo::Snapshot(self.cells),
        };
        self.history.push(record);

        self.cells[to.row as usize][to.col as usize] = Some(moved);
        self.cells[from.row as usize][from.col as usize] = None;
        Ok(captured)
    }

    /// Takes back the most recent move. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        match record {
            Undo::Paired { from, to, captured } => {
                let (fr, fc) = (from.row as usize, from.col as usize);
                let (tr, tc) = (to.row as usize, to.col as usize);
                self.cells[fr][fc] = self.cells[tr][tc];
                self.cells[tr][tc] = captured;
            }
            Undo::Snapshot(grid) => self.cells = grid,
        }
        true
    }

    /// Applies `mv` for the lifetime of the returned guard. The move is
    /// undone when the guard drops, whichever way the scope is left, along
    /// with anything applied through the guard since.
    pub fn trial(&mut self, mv: Move) -> Result<Trial<'_>> {
        let base = self.history.len();
        self.apply_move(mv.from, mv.to)?;
        Ok(Trial { board: self, base })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Two boards are equal when their cells match; history is not compared.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - r)?;
            for (c, cell) in row.iter().enumerate() {
                let ch = cell.map_or('.', Piece::to_char);
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// A move that is live only while this guard exists.
///
/// Dropping the guard unwinds the history back to where it stood before the
/// trial move, including any moves made through the guard and not undone.
pub struct Trial<'a> {
    board: &'a mut Board,
    base: usize,
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        while self.board.history.len() > self.base {
            self.board.undo();
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
