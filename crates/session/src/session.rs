//! One human-versus-engine game on a board the session owns.

use std::path::Path;

use chess_core::{
    game_status, leaves_king_in_check, legal_moves, moves_from, validate_input, Board, ChessError,
    Color, Engine, GameStatus, Move, Piece, Square, StrictInputRules,
};
use classical_engine::ClassicalEngine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};

/// One ply as written to the game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub side: Color,
    /// Algebraic text, e.g. "e2 e4"
    pub notation: String,
    pub captured: Option<Piece>,
}

/// Everything needed to replay a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub human: Color,
    pub moves: Vec<RecordedMove>,
    /// Status of the side to move at the end of the record
    pub status: GameStatus,
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move: Move,
    /// None if the human's move ended the game
    pub engine_move: Option<Move>,
    /// Side to move once the turn is over
    pub to_move: Color,
    /// Status of `to_move`
    pub status: GameStatus,
}

impl TurnReport {
    /// Winner, if the turn ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then(|| self.to_move.other())
    }
}

/// A game between a human and the classical engine.
pub struct GameSession {
    board: Board,
    engine: ClassicalEngine,
    human: Color,
    to_move: Color,
    moves: Vec<RecordedMove>,
    status: GameStatus,
}

impl GameSession {
    /// Starts a new game. If the engine has white it makes its first move
    /// straight away.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let mut session = Self {
            board: Board::with_strategy(config.undo_strategy),
            engine: ClassicalEngine::with_config(config.engine),
            human: config.human,
            to_move: Color::White,
            moves: Vec::new(),
            status: GameStatus::Ongoing,
        };
        session.reset()?;
        Ok(session)
    }

    /// Continues from a set-up position with the human to move. `reset`
    /// still returns to the standard initial position.
    pub fn with_board(config: SessionConfig, mut board: Board) -> Result<Self> {
        for side in [Color::White, Color::Black] {
            board.king_square(side).ok_or(ChessError::KingNotFound(side))?;
        }
        let status = game_status(&mut board, config.human)?;
        Ok(Self {
            board,
            engine: ClassicalEngine::with_config(config.engine),
            human: config.human,
            to_move: config.human,
            moves: Vec::new(),
            status,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Color {
        self.human
    }

    pub fn engine_side(&self) -> Color {
        self.human.other()
    }

    /// Status of the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Back to the initial position. Returns the engine's opening move when
    /// it plays white.
    pub fn reset(&mut self) -> Result<Option<Move>> {
        self.board.reset();
        self.moves.clear();
        self.to_move = Color::White;
        self.status = GameStatus::Ongoing;
        self.engine.new_game();
        info!(human = %self.human, "new game");

        if self.human == Color::White {
            return Ok(None);
        }
        let reply = self.engine_turn()?;
        self.status = game_status(&mut self.board, self.human)?;
        Ok(reply)
    }

    /// Plays the human's move given as text ("e2 e4"), then the engine's
    /// reply.
    pub fn play(&mut self, text: &str) -> Result<TurnReport> {
        if self.status.is_over() {
            return Err(SessionError::GameOver(self.status));
        }

        let mv = validate_input(&self.board, text, self.human, &StrictInputRules).inspect_err(
            |e| warn!(input = text, error = %e, "rejected move"),
        )?;
        if leaves_king_in_check(&mut self.board, self.human, mv)? {
            warn!(%mv, "rejected move into check");
            return Err(SessionError::SelfCheck(mv));
        }

        let start = self.moves.len();
        let status = self.status;
        match self.turn(mv) {
            Ok(report) => Ok(report),
            Err(e) => {
                self.rewind(start);
                self.status = status;
                Err(e)
            }
        }
    }

    /// Applies the human's checked move and the engine's reply.
    fn turn(&mut self, mv: Move) -> Result<TurnReport> {
        self.push(self.human, mv)?;

        let engine_side = self.engine_side();
        let status = game_status(&mut self.board, engine_side)?;
        if status.is_over() {
            self.status = status;
            info!(?status, loser = %engine_side, "game over");
            return Ok(TurnReport {
                human_move: mv,
                engine_move: None,
                to_move: engine_side,
                status,
            });
        }

        let engine_move = self.engine_turn()?;
        self.status = game_status(&mut self.board, self.human)?;
        if self.status.is_over() {
            info!(status = ?self.status, loser = %self.human, "game over");
        }

        Ok(TurnReport {
            human_move: mv,
            engine_move,
            to_move: self.human,
            status: self.status,
        })
    }

    /// Lets the engine move for its side. None if it has no legal move.
    fn engine_turn(&mut self) -> Result<Option<Move>> {
        let side = self.engine_side();
        let result = self.engine.choose(&self.board, side);
        debug!(
            engine = self.engine.name(),
            score = result.score,
            nodes = result.nodes,
            "engine search"
        );
        if let Some(mv) = result.best_move {
            self.push(side, mv)?;
        }
        Ok(result.best_move)
    }

    /// Drops recorded plies until `len` remain, with the human to move.
    fn rewind(&mut self, len: usize) {
        while self.moves.len() > len {
            self.moves.pop();
            self.board.undo();
        }
        self.to_move = self.human;
    }

    fn push(&mut self, side: Color, mv: Move) -> Result<()> {
        let captured = self.board.apply_move(mv.from, mv.to)?;
        self.moves.push(RecordedMove {
            side,
            notation: mv.to_string(),
            captured,
        });
        self.to_move = side.other();
        Ok(())
    }

    /// Takes back the human's last move together with the engine reply that
    /// followed it. Returns false when the human has not moved yet.
    pub fn undo_turn(&mut self) -> Result<bool> {
        if !self.moves.iter().any(|m| m.side == self.human) {
            return Ok(false);
        }
        while let Some(last) = self.moves.pop() {
            self.board.undo();
            if last.side == self.human {
                break;
            }
        }
        self.to_move = self.human;
        self.status = game_status(&mut self.board, self.human)?;
        debug!(plies = self.moves.len(), "turn undone");
        Ok(true)
    }

    /// Human's moves that keep their own king safe.
    pub fn legal_moves(&mut self) -> Result<Vec<Move>> {
        Ok(legal_moves(&mut self.board, self.human)?)
    }

    /// Safe moves of the human piece on the square named by `text` ("e2").
    pub fn hint(&mut self, text: &str) -> Result<Vec<Move>> {
        let from = Square::from_algebraic(text.trim())
            .ok_or_else(|| ChessError::InvalidNotation(text.to_string()))?;
        match self.board.piece_at(from) {
            None => return Err(ChessError::EmptySource(from).into()),
            Some(pc) if pc.color != self.human => {
                return Err(ChessError::WrongColor {
                    square: from,
                    side: self.human,
                }
                .into());
            }
            Some(_) => {}
        }

        let mut safe = Vec::new();
        for mv in moves_from(&self.board, from) {
            if !leaves_king_in_check(&mut self.board, self.human, mv)? {
                safe.push(mv);
            }
        }
        Ok(safe)
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            human: self.human,
            moves: self.moves.clone(),
            status: self.status,
        }
    }

    /// Save the game record to a JSON file
    pub fn save_record(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.record())?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
