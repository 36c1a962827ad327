//! Human player fed by lines of text.

use super::{Command, Controller};
use crate::games::tictactoe::Board;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

/// Human player reading commands from an input channel.
///
/// A closed channel reads as [`Command::Quit`].
pub struct HumanController {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl HumanController {
    /// Creates a new human controller.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Controller for HumanController {
    async fn next_command(&mut self, _board: Board) -> Result<Command> {
        loop {
            let Some(line) = self.input_rx.recv().await else {
                debug!(human = %self.name, "Input closed");
                return Ok(Command::Quit);
            };
            if line.trim().is_empty() {
                continue;
            }
            let command = Command::parse(&line);
            debug!(human = %self.name, ?command, "Human command");
            return Ok(command);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
