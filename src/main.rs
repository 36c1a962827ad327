//! Minimax Tic-Tac-Toe - command line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{Board, GameConfig, GameSession, Player, console, minimax, rules};
use serde::Serialize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            computer_first,
            think_delay_ms,
        } => run_play(config, computer_first, think_delay_ms).await,
        Command::BestMove { board, json } => run_best_move(&board, json),
        Command::Selfplay => run_selfplay(),
    }
}

/// Play interactively on the terminal
#[instrument]
async fn run_play(
    config_path: Option<std::path::PathBuf>,
    computer_first: bool,
    think_delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if computer_first {
        config = config.with_first_player(Player::Computer);
    }
    if let Some(ms) = think_delay_ms {
        config = config.with_think_delay_ms(ms);
    }

    info!(?config, "Starting console game");
    console::run_console(config).await?;
    Ok(())
}

#[derive(Serialize)]
struct Analysis {
    board: String,
    best_move: Option<usize>,
    scores: Vec<CellScore>,
}

#[derive(Serialize)]
struct CellScore {
    cell: usize,
    score: minimax::Score,
}

/// Analyze a board from the computer's side
#[instrument]
fn run_best_move(board: &str, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let status = rules::classify(&board);
    if status.is_terminal() {
        anyhow::bail!("Board is already decided: {:?}", status);
    }

    let best = minimax::best_move(&board);
    let scores = minimax::evaluate_moves(&board, Player::Computer);

    if json {
        let analysis = Analysis {
            board: board.to_string(),
            best_move: best.map(|pos| pos.to_index()),
            scores: scores
                .iter()
                .map(|(pos, score)| CellScore {
                    cell: pos.to_index(),
                    score: *score,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}\n", board.display());
        for (pos, score) in &scores {
            println!("{:>14} ({}): {:+}", pos.label(), pos.to_index() + 1, score);
        }
        if let Some(pos) = best {
            println!("\nBest move: {} ({})", pos, pos.to_index() + 1);
        }
    }
    Ok(())
}

/// Perfect play against perfect play
#[instrument]
fn run_selfplay() -> Result<()> {
    let mut session = GameSession::new();

    while session.is_active() {
        let player = session.to_move();
        let Some(pos) = minimax::best_move_for(session.board(), player) else {
            anyhow::bail!("No move available on an active board");
        };
        session.apply_move(pos.to_index(), player)?;
        println!("{} takes {}", player.symbol(), pos);
        session.swap_turn();
    }

    println!("\n{}\n\n{:?}", session.board().display(), session.status());
    Ok(())
}
