//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. They never look at
//! session state, so the search engine can evaluate hypothetical boards
//! with the same code that judges the real one.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::check_draw;
pub use status::classify;
pub use win::{WINNING_LINES, check_win, winner};
