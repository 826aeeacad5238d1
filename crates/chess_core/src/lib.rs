pub mod board;
pub mod error;
pub mod legality;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::ChessError;
pub use legality::*;
pub use movegen::*;
pub use notation::parse_move;
pub use perft::perft;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by move-selecting opponents
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the best line, positive favouring white
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that move-selecting engines implement.
///
/// The board passed in is never modified; engines search on their own copy.
pub trait Engine {
    /// Search for `side`'s move to at most `depth` plies.
    fn search(&mut self, board: &Board, side: Color, depth: u8) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
