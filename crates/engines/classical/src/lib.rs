//! Classical Chess Engine
//!
//! Minimax search with alpha-beta pruning over a material evaluation.

mod config;
mod eval;
mod search;

use chess_core::{Board, Color, Engine, SearchResult};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning (white maximises)
/// - Material evaluation with small pawn bonuses
/// - Optional iterative deepening without move reuse
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: EngineConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config: config.clamped(),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Searches at the configured depth.
    pub fn choose(&mut self, board: &Board, side: Color) -> SearchResult {
        let depth = self.config.depth;
        self.search(board, side, depth)
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, side: Color, depth: u8) -> SearchResult {
        let mut tmp = board.clone();
        let mut searcher = Searcher::new(self.config.terminal_scoring);
        let depth = depth.clamp(1, MAX_DEPTH);

        let outcome = if self.config.iterative_deepening {
            searcher.iterative_deepening(&mut tmp, depth, side)
        } else {
            searcher.search_root(&mut tmp, depth, side)
        };
        self.nodes = searcher.stats().nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use config::{EngineConfig, TerminalScoring, MAX_DEPTH};
pub use eval::{evaluate, piece_value, Score};
pub use search::{
    find_best_move, iterative_deepening, minimax, SearchOutcome, SearchStats, Searcher,
    INFINITY, MATE_SCORE,
};
