//! History consistency invariant: history length matches occupied squares.

use super::super::GameState;
use super::Invariant;

/// Invariant: history length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().len() == state.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new(Player::Human)));
    }

    #[test]
    fn test_mark_without_history_violates() {
        let mut state = GameState::new(Player::Human);
        state.board.set(Position::TopLeft, Square::Occupied(Player::Computer));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
