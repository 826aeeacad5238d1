//! Console front end: play the classical engine from a terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::{Color, GameStatus, Move};
use chess_session::{GameSession, SessionConfig, SessionError, TurnReport};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Play chess against a minimax engine.
#[derive(Debug, Parser)]
#[command(name = "chess_play", version)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search depth in plies (overrides config)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Color you play (overrides config)
    #[arg(long, value_enum)]
    color: Option<Side>,

    /// Use iterative deepening
    #[arg(long)]
    iterative: bool,

    /// Write the game record as JSON to this file when a game ends
    #[arg(long)]
    record: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "classical_engine=trace" (default: RUST_LOG, then "warn")
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SessionConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.engine.depth = depth;
        }
        if let Some(color) = self.color {
            config.human = color.into();
        }
        if self.iterative {
            config.engine.iterative_deepening = true;
        }
        config.engine = config.engine.clamped();
        Ok(config)
    }
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_help() {
    println!("Commands:");
    println!("  e2 e4      move a piece");
    println!("  undo       take back your last move and the reply");
    println!("  reset      start a new game");
    println!("  board      show the board");
    println!("  moves      list your legal moves");
    println!("  hint e2    list legal moves of the piece on e2");
    println!("  quit       leave");
}

fn join_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn announce_end(report: &TurnReport) {
    match (report.status, report.winner()) {
        (GameStatus::Checkmate, Some(winner)) => println!("Checkmate! {winner} wins."),
        (GameStatus::Stalemate, _) => println!("Stalemate. The game is drawn."),
        _ => {}
    }
}

struct Console {
    session: GameSession,
    record: Option<PathBuf>,
}

impl Console {
    fn save_record(&self) -> Result<()> {
        if let Some(path) = &self.record {
            self.session
                .save_record(path)
                .with_context(|| format!("writing game record {}", path.display()))?;
            info!(path = %path.display(), "game record saved");
        }
        Ok(())
    }

    fn new_game(&mut self) -> Result<()> {
        if let Some(opening) = self.session.reset()? {
            println!("Engine plays {opening}");
        }
        println!("{}", self.session.board());
        Ok(())
    }

    fn play(&mut self, text: &str) -> Result<()> {
        let report = match self.session.play(text) {
            Ok(report) => report,
            Err(SessionError::Chess(e)) => {
                println!("Invalid move: {e}");
                return Ok(());
            }
            Err(e @ (SessionError::SelfCheck(_) | SessionError::GameOver(_))) => {
                println!("{e}");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(reply) = report.engine_move {
            println!("Engine plays {reply}");
        }
        println!("{}", self.session.board());

        if report.status.is_over() {
            announce_end(&report);
            self.save_record()?;
            self.new_game()?;
        } else if report.status == GameStatus::Check {
            println!("Check!");
        }
        Ok(())
    }

    /// Handles one input line. Returns false on `quit`.
    fn command(&mut self, line: &str) -> Result<bool> {
        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("quit" | "exit") => return Ok(false),
            Some("help") => print_help(),
            Some("board") => println!("{}", self.session.board()),
            Some("undo") => {
                if self.session.undo_turn()? {
                    println!("{}", self.session.board());
                } else {
                    println!("Nothing to undo.");
                }
            }
            Some("reset") => self.new_game()?,
            Some("moves") => println!("{}", join_moves(&self.session.legal_moves()?)),
            Some("hint") => match words.next() {
                Some(square) => match self.session.hint(square) {
                    Ok(moves) if moves.is_empty() => println!("That piece cannot move."),
                    Ok(moves) => println!("{}", join_moves(&moves)),
                    Err(e) => println!("{e}"),
                },
                None => println!("Usage: hint <square>"),
            },
            Some(_) => self.play(line)?,
        }
        Ok(true)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let config = args.session_config()?;
    let mut console = Console {
        session: GameSession::new(config.clone())?,
        record: args.record.clone(),
    };

    println!(
        "You play {} against the engine at depth {}. Type 'help' for commands.",
        config.human, config.engine.depth
    );
    if let Some(opening) = console.session.record().moves.first() {
        if console.session.engine_side() == Color::White {
            println!("Engine plays {}", opening.notation);
        }
    }
    println!("{}", console.session.board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} > ", console.session.to_move());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !console.command(line.trim())? {
            break;
        }
    }

    if !console.session.record().moves.is_empty() {
        console.save_record()?;
    }
    Ok(())
}
