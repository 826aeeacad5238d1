//! Engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

/// Deepest search the engine accepts.
pub const MAX_DEPTH: u8 = 8;

/// How an interior node with no surviving moves is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalScoring {
    /// Mate scores for the side in check, zero for stalemate.
    #[default]
    Rigorous,
    /// Evaluate the position as if it were a leaf.
    Static,
}

/// Configuration for the classical engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Re-run the search at every depth from 1 up to `depth`
    pub iterative_deepening: bool,
    /// Scoring of nodes where every move was filtered out
    pub terminal_scoring: TerminalScoring,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            iterative_deepening: false,
            terminal_scoring: TerminalScoring::Rigorous,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let config: EngineConfig = toml::from_str(text)?;
        Ok(config.clamped())
    }

    /// Keeps `depth` within `1..=MAX_DEPTH`.
    pub fn clamped(mut self) -> Self {
        self.depth = self.depth.clamp(1, MAX_DEPTH);
        self
    }
}
