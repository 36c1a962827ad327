//! Alternating turn invariant: the opener moves first, then players alternate.

use super::super::GameState;
use super::Invariant;

/// Invariant: the first recorded move belongs to the starting player and no
/// player moves twice in a row, so mark counts never differ by more than one.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && first.player != state.starting_player()
        {
            return false;
        }

        history
            .windows(2)
            .all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opener"
    }
}
