//! The perfect-play computer opponent.

use super::{Command, Controller};
use crate::games::tictactoe::minimax::Minimax;
use crate::games::tictactoe::{Board, Player};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// Computer player choosing cells by exhaustive minimax.
///
/// Waits `think_delay` before answering so the reply doesn't land
/// instantly; the search itself returns immediately.
pub struct MinimaxController {
    name: String,
    think_delay: Duration,
    search: Minimax,
}

impl MinimaxController {
    /// Creates a new minimax controller.
    pub fn new(name: impl Into<String>, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            think_delay,
            search: Minimax::new(),
        }
    }
}

#[async_trait::async_trait]
impl Controller for MinimaxController {
    async fn next_command(&mut self, board: Board) -> Result<Command> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let Some(position) = self.search.best_move_for(&board, Player::Computer) else {
            anyhow::bail!("No valid moves available");
        };
        debug!(ai = %self.name, %position, nodes = self.search.nodes(), "AI chose position");
        Ok(Command::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
