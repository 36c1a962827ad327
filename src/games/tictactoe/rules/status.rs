//! The single authoritative board status.

use super::super::{Board, GameStatus};
use super::{check_draw, winner};

/// Classifies a board as ongoing, won or drawn.
///
/// A win takes precedence over fullness: a board filled by a winning mark is
/// `Won`, never `Draw`. Pure function of the board.
pub fn classify(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if check_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}
