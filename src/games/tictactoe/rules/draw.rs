//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};

/// True iff every cell is occupied.
///
/// Fullness alone does not make a draw: the last mark may also complete a
/// line. Check for a win first, or use [`classify`](super::classify).
pub fn check_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
