//! Console driver: play against the computer in a terminal.

mod orchestrator;
mod players;
mod render;

pub use orchestrator::Orchestrator;
pub use players::{Command, Controller, HumanController, MinimaxController};
pub use render::{ConsoleEvent, render};

use crate::config::GameConfig;
use crate::games::tictactoe::Scoreboard;
use anyhow::{Context, Result};
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Plays games on stdin/stdout until the player quits or input ends.
#[instrument(skip_all)]
pub async fn run_console(config: GameConfig) -> Result<Scoreboard> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    // A plain thread: a blocked stdin read must not hold up runtime shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin reader finished");
    });

    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = render(&event) {
                println!("{}", text);
            }
        }
    });

    let human = Box::new(HumanController::new(config.human_name().clone(), input_rx));
    let computer = Box::new(MinimaxController::new("Computer", config.think_delay()));
    let mut orchestrator = Orchestrator::new(config.new_session(), human, computer, event_tx);

    let scores = orchestrator.run().await?;
    drop(orchestrator);
    printer.await.context("Console printer failed")?;

    info!(%scores, "Console session finished");
    Ok(scores)
}
