//! Session configuration, loadable from TOML.

use std::path::Path;

use chess_core::{Color, UndoStrategy};
use classical_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Color played by the human
    pub human: Color,
    /// How the board records moves for undo
    pub undo_strategy: UndoStrategy,
    /// Engine settings, under an `[engine]` table
    pub engine: EngineConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: Color::White,
            undo_strategy: UndoStrategy::Paired,
            engine: EngineConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: SessionConfig = toml::from_str(text)?;
        config.engine = config.engine.clamped();
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classical_engine::{TerminalScoring, MAX_DEPTH};

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(SessionConfig::from_toml_str("").unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_nested_engine_table() {
        let config = SessionConfig::from_toml_str(
            r#"
            human = "black"
            undo_strategy = "snapshot"

            [engine]
            depth = 12
            terminal_scoring = "static"
            "#,
        )
        .unwrap();
        assert_eq!(config.human, Color::Black);
        assert_eq!(config.undo_strategy, UndoStrategy::Snapshot);
        assert_eq!(config.engine.depth, MAX_DEPTH);
        assert_eq!(config.engine.terminal_scoring, TerminalScoring::Static);
        assert!(!config.engine.iterative_deepening);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        assert!(SessionConfig::from_toml_str(r#"human = "green""#).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SessionConfig::load("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, crate::SessionError::Io(_)));
    }
}
