//! Replay invariant: the history rebuilds the board exactly.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board, and no move overwrote an occupied square.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Replaying history reproduces the board"
    }
}
