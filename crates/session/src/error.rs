use chess_core::{ChessError, GameStatus, Move};
use thiserror::Error;

/// Errors raised while driving a game session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The move would leave the mover's own king attacked
    #[error("{0} leaves your king in check")]
    SelfCheck(Move),

    /// No further moves are accepted until the game is reset
    #[error("Game is over ({0:?}); reset to play again")]
    GameOver(GameStatus),

    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to serialize game record: {0}")]
    Record(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
