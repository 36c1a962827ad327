//! Tic-tac-toe against a perfect-play computer opponent.
//!
//! - **Board model**: [`GameSession`] owns board, history and turn and is
//!   the only writer; [`rules`] judges any board snapshot.
//! - **Search engine**: [`minimax`] finds the optimal cell by exhaustive
//!   search over board copies.

mod action;
pub mod contracts;
mod events;
mod game;
pub mod invariants;
pub mod minimax;
mod position;
pub mod rules;
mod scoreboard;
mod types;

pub use action::{IllegalMove, Move, UndoUnavailable};
pub use events::{GameEvent, GameObserver, Outcome};
pub use game::{FirstMovePolicy, GameSession};
pub use position::Position;
pub use scoreboard::Scoreboard;
pub use types::{Board, BoardParseError, GameState, GameStatus, Player, Square};
