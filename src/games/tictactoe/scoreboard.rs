//! Running tally of finished games within a session.

use super::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wins and draws accumulated across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games the human won.
    human_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWin => self.human_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total number of finished games.
    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player: {}  Computer: {}  Draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut scores = Scoreboard::new();
        scores.record(Outcome::HumanWin);
        scores.record(Outcome::ComputerWin);
        scores.record(Outcome::ComputerWin);
        scores.record(Outcome::Draw);

        assert_eq!(*scores.human_wins(), 1);
        assert_eq!(*scores.computer_wins(), 2);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.games_played(), 4);
        assert_eq!(scores.to_string(), "Player: 1  Computer: 2  Draws: 1");
    }
}
