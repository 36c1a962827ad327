//! Notifications a game session publishes to its subscribers.
//!
//! The session decides nothing about presentation. Drivers subscribe an
//! observer and turn events into output, sound, or anything else.

use super::{GameStatus, Move, Player};
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// The outcome for a terminal status, `None` while the game is ongoing.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Won(Player::Human) => Some(Outcome::HumanWin),
            GameStatus::Won(Player::Computer) => Some(Outcome::ComputerWin),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::HumanWin => Some(Player::Human),
            Outcome::ComputerWin => Some(Player::Computer),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::HumanWin => write!(f, "You win!"),
            Outcome::ComputerWin => write!(f, "Computer wins!"),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// A state change in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MoveApplied(Move),
    /// The turn passed to the given player.
    TurnChanged(Player),
    /// The game reached a terminal state.
    GameEnded(Outcome),
    /// A mark was taken back.
    MoveUndone(Move),
    /// Board and history were cleared for a new game.
    Reset {
        /// Who opens the new game.
        starting_player: Player,
    },
}

/// Receives [`GameEvent`]s from a session.
///
/// Implemented for any `FnMut(&GameEvent) + Send` closure.
pub trait GameObserver: Send {
    /// Called after the state change described by `event` has been applied.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}
