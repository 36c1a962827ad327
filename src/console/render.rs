//! Text rendering of driver output.

use crate::games::tictactoe::{Board, GameEvent, Player, Scoreboard};

/// Everything the console driver shows the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// A notification from the game session.
    Game(GameEvent),
    /// The board after a change.
    Board(Board),
    /// The computer is choosing a move.
    Thinking,
    /// The human is to move.
    YourTurn,
    /// A command was refused.
    Rejected(String),
    /// The game ended; waiting for restart or quit.
    GameOver(Scoreboard),
    /// The player left.
    Farewell(Scoreboard),
}

/// Text for one console event, `None` for events shown implicitly.
pub fn render(event: &ConsoleEvent) -> Option<String> {
    match event {
        ConsoleEvent::Game(GameEvent::MoveApplied(mov)) => Some(format!(
            "{} takes {}",
            mov.player.symbol(),
            mov.position
        )),
        ConsoleEvent::Game(GameEvent::TurnChanged(_)) => None,
        ConsoleEvent::Game(GameEvent::GameEnded(outcome)) => Some(outcome.to_string()),
        ConsoleEvent::Game(GameEvent::MoveUndone(mov)) => Some(format!(
            "Took back {} at {}",
            mov.player.symbol(),
            mov.position
        )),
        ConsoleEvent::Game(GameEvent::Reset { starting_player }) => Some(match starting_player {
            Player::Human => "New game. You go first.".to_string(),
            Player::Computer => "New game. Computer goes first.".to_string(),
        }),
        ConsoleEvent::Board(board) => Some(format!("\n{}\n", board.display())),
        ConsoleEvent::Thinking => Some("Computer is thinking...".to_string()),
        ConsoleEvent::YourTurn => Some("Your move (1-9, undo, restart, quit):".to_string()),
        ConsoleEvent::Rejected(reason) => Some(reason.clone()),
        ConsoleEvent::GameOver(scores) => Some(format!("{}\nType restart or quit:", scores)),
        ConsoleEvent::Farewell(scores) => Some(format!("Final score: {}", scores)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Outcome, Position};

    #[test]
    fn test_render_move() {
        let event = ConsoleEvent::Game(GameEvent::MoveApplied(Move::new(
            Player::Computer,
            Position::TopLeft,
        )));
        assert_eq!(render(&event).as_deref(), Some("O takes Top-left"));
    }

    #[test]
    fn test_turn_change_is_silent() {
        let event = ConsoleEvent::Game(GameEvent::TurnChanged(Player::Human));
        assert_eq!(render(&event), None);
    }

    #[test]
    fn test_render_outcome_and_scores() {
        let ended = ConsoleEvent::Game(GameEvent::GameEnded(Outcome::ComputerWin));
        assert_eq!(render(&ended).as_deref(), Some("Computer wins!"));

        let mut scores = Scoreboard::new();
        scores.record(Outcome::Draw);
        assert_eq!(
            render(&ConsoleEvent::Farewell(scores)).as_deref(),
            Some("Final score: Player: 0  Computer: 0  Draws: 1")
        );
    }
}
