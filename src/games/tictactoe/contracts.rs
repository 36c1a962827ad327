//! Contract-based validation for tic-tac-toe.
//!
//! Every legality rule for placing and retracting marks lives here, so the
//! session checks them in one place instead of at each call site.
//! Contracts follow Hoare-style reasoning: {P} action {Q}.

use super::action::{IllegalMove, Move, UndoUnavailable};
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::{GameState, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Why the precondition failed.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameActive;

impl GameActive {
    /// Fails with [`IllegalMove::GameOver`] on a finished game.
    pub fn check(state: &GameState) -> Result<(), IllegalMove> {
        if state.is_active() {
            Ok(())
        } else {
            Err(IllegalMove::GameOver)
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`IllegalMove::SquareOccupied`].
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMove> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(IllegalMove::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`IllegalMove::WrongPlayer`].
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMove> {
        if mov.player == state.to_move() {
            Ok(())
        } else {
            Err(IllegalMove::WrongPlayer(mov.player))
        }
    }
}

/// Composite precondition for placing a mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMove> {
        GameActive::check(state)?;
        SquareIsEmpty::check(mov, state)?;
        PlayersTurn::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Postconditions: exactly one move was appended and all
/// [`TicTacToeInvariants`] hold.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    type Error = IllegalMove;

    fn pre(state: &GameState, action: &Move) -> Result<(), IllegalMove> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        if after.history().len() != before.history().len() + 1 {
            return Err(vec![InvariantViolation::new(
                "A move appends exactly one history entry",
            )]);
        }
        TicTacToeInvariants::check_all(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Undo Contract
// ─────────────────────────────────────────────────────────────

/// A request to take back the last human move (and the reply to it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRequest {
    /// Whether a human move still awaiting the computer's reply may be
    /// taken back on its own.
    pub allow_pending: bool,
}

/// Counts how many plies an undo would retract.
pub struct RetractablePlies;

impl RetractablePlies {
    /// Returns 1 when the last move is the human's, 2 when it is a computer
    /// reply preceded by a human move.
    #[instrument(skip(state))]
    pub fn count(state: &GameState, request: &UndoRequest) -> Result<usize, UndoUnavailable> {
        if !state.is_active() {
            return Err(UndoUnavailable::GameOver);
        }

        let history = state.history();
        let Some(last) = history.last() else {
            return Err(UndoUnavailable::EmptyHistory);
        };

        if state.to_move() == Player::Computer && !request.allow_pending {
            return Err(UndoUnavailable::NotHumansTurn);
        }

        match last.player {
            Player::Human => Ok(1),
            Player::Computer => {
                let answered = history.len().checked_sub(2).map(|i| history[i].player);
                if answered == Some(Player::Human) {
                    Ok(2)
                } else {
                    Err(UndoUnavailable::NothingToRetract)
                }
            }
        }
    }
}

/// Contract for undo.
///
/// Postconditions: the new history is a strict prefix of the old one and
/// all [`TicTacToeInvariants`] hold.
pub struct UndoContract;

impl Contract<GameState, UndoRequest> for UndoContract {
    type Error = UndoUnavailable;

    fn pre(state: &GameState, action: &UndoRequest) -> Result<(), UndoUnavailable> {
        RetractablePlies::count(state, action).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let shrunk = after.history().len() < before.history().len();
        if !shrunk || !before.history().starts_with(after.history()) {
            return Err(vec![InvariantViolation::new(
                "Undo leaves a strict prefix of the history",
            )]);
        }
        if after.to_move() != Player::Human {
            return Err(vec![InvariantViolation::new("Undo hands the turn to the human")]);
        }
        TicTacToeInvariants::check_all(after)
    }
}

/// Asserts a postcondition in debug builds, logging the violations first.
pub fn assert_post(result: Result<(), Vec<InvariantViolation>>) {
    if let Err(violations) = &result {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
    }
    debug_assert!(result.is_ok(), "Postcondition failed: {:?}", result);
}
