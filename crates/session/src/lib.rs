//! Game session
//!
//! Owns the board for one human-versus-engine game: validates the human's
//! input, lets the classical engine reply, reports check and game end, and
//! can take turns back or write the game out as JSON.

mod config;
mod error;
mod session;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use session::{GameRecord, GameSession, RecordedMove, TurnReport};
