//! Moves and the ways applying or retracting them can be refused.
//!
//! Moves are domain events, not side effects: a `Move` records who placed a
//! mark where, and the history of moves is enough to rebuild the board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A placed mark: a player claiming a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A rejected move. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for IllegalMove {}

/// A rejected undo request. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum UndoUnavailable {
    /// No moves have been played since the last reset.
    #[display("Nothing to undo")]
    EmptyHistory,

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The computer is about to reply and pending undo is disabled.
    #[display("Undo is only available on the human's turn")]
    NotHumansTurn,

    /// Only computer moves remain; they are retracted together with the
    /// human move they answered.
    #[display("No human move to take back")]
    NothingToRetract,
}

impl std::error::Error for UndoUnavailable {}
