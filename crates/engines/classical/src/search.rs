//! Minimax search with alpha-beta pruning

use chess_core::{is_in_check, moves_for, Board, Color, Move};
use tracing::{debug, trace};

use crate::config::TerminalScoring;
use crate::eval::{evaluate, Score};

/// Base score for a mated side; remaining depth is added on top so that
/// quicker mates score further from zero.
pub const MATE_SCORE: Score = 100_000;

/// Window bound, far outside any reachable score.
pub const INFINITY: Score = i32::MAX / 2;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Deepest ply below the starting position that was reached
    pub max_ply: u8,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found (None if the side has no legal move)
    pub best_move: Option<Move>,
    /// Score of that move, positive favouring white
    pub score: Score,
    /// Depth of the search that produced the move
    pub depth: u8,
    /// Nodes visited
    pub nodes: u64,
}

/// A side with no king can never be in check.
fn king_exposed(board: &Board, side: Color) -> bool {
    is_in_check(board, side).unwrap_or(false)
}

fn side_to_move(maximizing: bool) -> Color {
    if maximizing {
        Color::White
    } else {
        Color::Black
    }
}

/// Walks the game tree for one search. White maximises, black minimises.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    scoring: TerminalScoring,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(scoring: TerminalScoring) -> Self {
        Self {
            scoring,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score of `board` searched `depth` plies deep with the side given by
    /// `maximizing` to move. At depth 0 this is exactly `evaluate(board)`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.node(board, depth, maximizing, alpha, beta, 0)
    }

    fn node(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        ply: u8,
    ) -> Score {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 {
            return evaluate(board);
        }

        let side = side_to_move(maximizing);
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut searched = 0usize;

        for mv in moves_for(board, side) {
            let Ok(mut trial) = board.trial(mv) else {
                continue;
            };
            if king_exposed(&trial, side) {
                continue;
            }
            searched += 1;

            let score = self.node(&mut trial, depth - 1, !maximizing, alpha, beta, ply + 1);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break; // Cutoff
            }
        }

        if searched == 0 {
            return self.terminal(board, side, depth);
        }
        best
    }

    /// Score of an interior node where `side` has no move that keeps its
    /// king safe.
    fn terminal(&self, board: &Board, side: Color, depth: u8) -> Score {
        match self.scoring {
            TerminalScoring::Static => evaluate(board),
            TerminalScoring::Rigorous if king_exposed(board, side) => {
                let mate = MATE_SCORE + depth as Score;
                match side {
                    Color::White => -mate,
                    Color::Black => mate,
                }
            }
            TerminalScoring::Rigorous => 0,
        }
    }

    /// One top-level ply: tries every move of `side` that keeps its king
    /// safe and searches the reply tree `depth - 1` plies deep.
    pub fn search_root(&mut self, board: &mut Board, depth: u8, side: Color) -> SearchOutcome {
        self.stats.nodes += 1;
        let maximizing = side == Color::White;
        let mut best_move = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves_for(board, side) {
            let Ok(mut trial) = board.trial(mv) else {
                continue;
            };
            if king_exposed(&trial, side) {
                continue;
            }

            let score = self.node(
                &mut trial,
                depth.saturating_sub(1),
                !maximizing,
                -INFINITY,
                INFINITY,
                1,
            );

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let score = if best_move.is_some() { best_score } else { 0 };
        debug!(
            %side,
            depth,
            nodes = self.stats.nodes,
            score,
            best = ?best_move.map(|m| m.to_string()),
            "search complete"
        );

        SearchOutcome {
            best_move,
            score,
            depth,
            nodes: self.stats.nodes,
        }
    }

    /// Runs `search_root` at depths `1..=max_depth` and keeps the last
    /// result. Nothing learned at one depth is reused at the next.
    pub fn iterative_deepening(
        &mut self,
        board: &mut Board,
        max_depth: u8,
        side: Color,
    ) -> SearchOutcome {
        let mut outcome = SearchOutcome {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: self.stats.nodes,
        };
        for depth in 1..=max_depth {
            outcome = self.search_root(board, depth, side);
            trace!(depth, score = outcome.score, nodes = outcome.nodes, "iteration done");
        }
        outcome
    }
}

/// Minimax score with rigorous mate and stalemate scoring.
pub fn minimax(board: &mut Board, depth: u8, maximizing: bool, alpha: Score, beta: Score) -> Score {
    Searcher::default().minimax(board, depth, maximizing, alpha, beta)
}

/// Best move for `side` searched `depth` plies deep, or `None` if it has
/// no legal move.
pub fn find_best_move(board: &mut Board, depth: u8, side: Color) -> Option<Move> {
    Searcher::default().search_root(board, depth, side).best_move
}

pub fn iterative_deepening(board: &mut Board, max_depth: u8, side: Color) -> Option<Move> {
    Searcher::default()
        .iterative_deepening(board, max_depth, side)
        .best_move
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
