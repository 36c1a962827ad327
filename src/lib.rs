//! Minimax tic-tac-toe - a human against a perfect-play computer.
//!
//! # Architecture
//!
//! - **Board model**: [`GameSession`] validates and applies moves, tracks
//!   turns, detects wins and draws, and undoes moves.
//! - **Search engine**: [`minimax`] computes the computer's optimal cell by
//!   exhaustive search.
//! - **Sessions**: [`SessionManager`] keeps many independent sessions and
//!   serializes access to each.
//! - **Console**: an async driver that plays a session on a terminal.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{GameSession, GameStatus, Player, minimax};
//!
//! let mut session = GameSession::new();
//! session.apply_move(4, Player::Human).unwrap();
//! session.swap_turn();
//!
//! let reply = minimax::best_move(session.board()).unwrap();
//! assert!(reply.is_corner());
//! let status = session.apply_move(reply.to_index(), Player::Computer).unwrap();
//! assert_eq!(status, GameStatus::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{SessionError, SessionId, SessionManager};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, FirstMovePolicy, GameEvent, GameObserver, GameSession, GameState,
    GameStatus, IllegalMove, Move, Outcome, Player, Position, Scoreboard, Square,
    UndoUnavailable, contracts, invariants, minimax, rules,
};
