//! Controllers deciding each side's next command.

mod human;
mod minimax_ai;

pub use human::HumanController;
pub use minimax_ai::MinimaxController;

use crate::games::tictactoe::{Board, Position};
use anyhow::Result;

/// What a side wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Claim a cell.
    Place(Position),
    /// Take back the last human move.
    Undo,
    /// Start the next game.
    Restart,
    /// Leave the table.
    Quit,
    /// Input that matched nothing.
    Unrecognized(String),
}

impl Command {
    /// Parses one line of player input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "u" | "undo" => Command::Undo,
            "r" | "restart" | "new" => Command::Restart,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Position::from_label_or_number(trimmed)
                .map(Command::Place)
                .unwrap_or_else(|| Command::Unrecognized(trimmed.to_string())),
        }
    }
}

/// Something that picks commands for one side of the board.
#[async_trait::async_trait]
pub trait Controller: Send {
    /// Waits for the next command given the current board.
    async fn next_command(&mut self, board: Board) -> Result<Command>;

    /// Returns the controller's display name.
    fn name(&self) -> &str;
}
