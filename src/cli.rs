//! Command-line interface for minimax_tictactoe.

use clap::{Parser, Subcommand};

/// Minimax Tic-Tac-Toe - play against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Tic-tac-toe against a perfect-play minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Let the computer open the first game
        #[arg(long)]
        computer_first: bool,

        /// Override the computer's thinking delay
        #[arg(long)]
        think_delay_ms: Option<u64>,
    },

    /// Print the computer's best move for a board
    BestMove {
        /// Nine cells, row-major: X human, O computer, _ empty (e.g. "X___O____")
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from an empty board
    Selfplay,
}
