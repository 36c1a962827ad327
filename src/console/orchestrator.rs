//! Game orchestration between the human and the computer.

use super::players::{Command, Controller};
use super::render::ConsoleEvent;
use crate::games::tictactoe::{GameEvent, GameSession, Player, Position, Scoreboard};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Drives one session: asks whichever side is to move for a command and
/// applies it through the session.
///
/// Human input is only read on the human's turn, so undo can never race
/// the computer's reply.
pub struct Orchestrator {
    session: GameSession,
    human: Box<dyn Controller>,
    computer: Box<dyn Controller>,
    event_tx: mpsc::UnboundedSender<ConsoleEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator and subscribes the output channel to the
    /// session's events.
    pub fn new(
        mut session: GameSession,
        human: Box<dyn Controller>,
        computer: Box<dyn Controller>,
        event_tx: mpsc::UnboundedSender<ConsoleEvent>,
    ) -> Self {
        let game_tx = event_tx.clone();
        session.subscribe(Box::new(move |event: &GameEvent| {
            if game_tx.send(ConsoleEvent::Game(event.clone())).is_err() {
                debug!("Console output closed");
            }
        }));

        Self {
            session,
            human,
            computer,
            event_tx,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    fn send(&self, event: ConsoleEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }

    fn send_board(&self) -> Result<()> {
        self.send(ConsoleEvent::Board(*self.session.board()))
    }

    /// Runs games until the human quits; returns the final tally.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Scoreboard> {
        info!(human = %self.human.name(), computer = %self.computer.name(), "Starting game orchestration");
        self.send_board()?;

        loop {
            if !self.session.is_active() {
                self.send(ConsoleEvent::GameOver(*self.session.scoreboard()))?;
                match self.human.next_command(*self.session.board()).await? {
                    Command::Restart => self.restart()?,
                    Command::Quit => break,
                    other => {
                        debug!(?other, "Ignored after game end");
                        self.send(ConsoleEvent::Rejected(
                            "Game over. Type restart or quit.".to_string(),
                        ))?;
                    }
                }
                continue;
            }

            let to_move = self.session.to_move();
            let board = *self.session.board();
            let command = match to_move {
                Player::Human => {
                    self.send(ConsoleEvent::YourTurn)?;
                    self.human.next_command(board).await?
                }
                Player::Computer => {
                    self.send(ConsoleEvent::Thinking)?;
                    self.computer.next_command(board).await?
                }
            };

            match command {
                Command::Place(position) => self.place(position, to_move)?,
                Command::Undo => self.undo()?,
                Command::Restart => self.restart()?,
                Command::Quit => break,
                Command::Unrecognized(input) => {
                    self.send(ConsoleEvent::Rejected(format!("Unrecognized input {:?}", input)))?
                }
            }
        }

        let scores = *self.session.scoreboard();
        info!(%scores, "Leaving table");
        self.send(ConsoleEvent::Farewell(scores))?;
        Ok(scores)
    }

    fn place(&mut self, position: Position, player: Player) -> Result<()> {
        match self.session.apply_move(position.to_index(), player) {
            Ok(status) => {
                self.send_board()?;
                if !status.is_terminal() {
                    self.session.swap_turn();
                }
                Ok(())
            }
            Err(e) if player == Player::Computer => {
                anyhow::bail!("Computer chose an illegal move: {}", e)
            }
            Err(e) => {
                warn!(%position, error = %e, "Human move rejected");
                self.send(ConsoleEvent::Rejected(e.to_string()))
            }
        }
    }

    fn undo(&mut self) -> Result<()> {
        match self.session.undo_last_move() {
            Ok(_) => self.send_board(),
            Err(e) => self.send(ConsoleEvent::Rejected(e.to_string())),
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.session.restart();
        self.send_board()
    }
}
