//! The game session: sole writer of board, history and turn.

use super::action::{IllegalMove, Move, UndoUnavailable};
use super::contracts::{Contract, MoveContract, RetractablePlies, UndoContract, UndoRequest, assert_post};
use super::events::{GameEvent, GameObserver, Outcome};
use super::rules::classify;
use super::scoreboard::Scoreboard;
use super::{Board, GameState, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who opens the next game on [`GameSession::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMovePolicy {
    /// Whoever did not open the previous game.
    #[default]
    Alternate,
    /// The human always opens.
    Human,
    /// The computer always opens.
    Computer,
}

impl FirstMovePolicy {
    /// The opener of the game following one opened by `previous`.
    pub fn next_starter(self, previous: Player) -> Player {
        match self {
            Self::Alternate => previous.opponent(),
            Self::Human => Player::Human,
            Self::Computer => Player::Computer,
        }
    }
}

/// One human-versus-computer table.
///
/// Owns the [`GameState`] exclusively; every mutation goes through
/// [`apply_move`](Self::apply_move), [`swap_turn`](Self::swap_turn),
/// [`undo_last_move`](Self::undo_last_move) or [`reset`](Self::reset),
/// which validate first and change nothing on failure. Subscribed
/// observers are notified after each change.
///
/// Placing a mark never passes the turn; the driver calls `swap_turn`
/// once it has checked the resulting status.
pub struct GameSession {
    state: GameState,
    first_move: FirstMovePolicy,
    allow_pending_undo: bool,
    scoreboard: Scoreboard,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameSession {
    /// Creates a session with the human opening and default policies.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(Player::Human, FirstMovePolicy::default(), true)
    }

    /// Creates a session with explicit opener and policies.
    #[instrument]
    pub fn with_rules(
        starting_player: Player,
        first_move: FirstMovePolicy,
        allow_pending_undo: bool,
    ) -> Self {
        info!(?starting_player, ?first_move, allow_pending_undo, "Creating game session");
        Self {
            state: GameState::new(starting_player),
            first_move,
            allow_pending_undo,
            scoreboard: Scoreboard::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for all future events.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(?event, observers = self.observers.len(), "Emitting event");
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the move history since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Returns the recorded status of the current game.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Whether the current game still accepts moves.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns the tally of finished games.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the restart policy.
    pub fn first_move_policy(&self) -> FirstMovePolicy {
        self.first_move
    }

    /// Classifies the current board.
    pub fn classify(&self) -> GameStatus {
        classify(self.state.board())
    }

    /// Places `player`'s mark at cell `index` (0-8).
    ///
    /// Appends the move to history and, if the mark ends the game, records
    /// the outcome. Does not pass the turn.
    ///
    /// # Errors
    ///
    /// [`IllegalMove`] for an out-of-range index, an occupied cell, a
    /// finished game, or a player moving out of turn.
    #[instrument(skip(self), fields(to_move = ?self.state.to_move()))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, IllegalMove> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move outside the board");
            IllegalMove::OutOfRange(index)
        })?;
        let action = Move::new(player, position);

        MoveContract::pre(&self.state, &action).inspect_err(|e| {
            warn!(%action, error = %e, "Illegal move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        self.state.board.set(position, Square::Occupied(player));
        self.state.history.push(action);
        let status = classify(&self.state.board);
        self.state.status = status;

        #[cfg(debug_assertions)]
        assert_post(MoveContract::post(&before, &self.state));

        info!(%action, ?status, "Move applied");
        self.emit(GameEvent::MoveApplied(action));

        if let Some(outcome) = Outcome::from_status(status) {
            self.scoreboard.record(outcome);
            info!(?outcome, scoreboard = %self.scoreboard, "Game ended");
            self.emit(GameEvent::GameEnded(outcome));
        }

        Ok(status)
    }

    /// Passes the turn to the other player. No-op on a finished game.
    #[instrument(skip(self))]
    pub fn swap_turn(&mut self) {
        if !self.is_active() {
            debug!("Game over, turn not passed");
            return;
        }
        self.state.to_move = self.state.to_move.opponent();
        debug!(to_move = ?self.state.to_move, "Turn passed");
        self.emit(GameEvent::TurnChanged(self.state.to_move));
    }

    /// Takes back the last human move, together with the computer's reply
    /// to it when there is one, and hands the turn to the human.
    ///
    /// While the computer has not yet replied the human move is retracted on
    /// its own, if the session allows pending undo. A computer opening with
    /// no human move after it cannot be retracted.
    ///
    /// Returns the retracted moves, most recent first.
    ///
    /// # Errors
    ///
    /// [`UndoUnavailable`] when there is nothing to take back, the game is
    /// over, or the computer is to move and pending undo is disabled.
    #[instrument(skip(self), fields(history_len = self.state.history().len()))]
    pub fn undo_last_move(&mut self) -> Result<Vec<Move>, UndoUnavailable> {
        let request = UndoRequest {
            allow_pending: self.allow_pending_undo,
        };
        let plies = RetractablePlies::count(&self.state, &request).inspect_err(|e| {
            warn!(error = %e, "Undo rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let mut undone = Vec::with_capacity(plies);
        for _ in 0..plies {
            if let Some(mov) = self.state.history.pop() {
                self.state.board.set(mov.position, Square::Empty);
                undone.push(mov);
            }
        }
        let previous_turn = self.state.to_move;
        self.state.to_move = Player::Human;
        self.state.status = GameStatus::Ongoing;

        #[cfg(debug_assertions)]
        assert_post(UndoContract::post(&before, &self.state));

        info!(plies, "Moves undone");
        for mov in &undone {
            self.emit(GameEvent::MoveUndone(*mov));
        }
        if previous_turn != Player::Human {
            self.emit(GameEvent::TurnChanged(Player::Human));
        }

        Ok(undone)
    }

    /// Clears board and history and gives the first turn to
    /// `starting_player`. The scoreboard is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self, starting_player: Player) {
        self.state = GameState::new(starting_player);
        info!(?starting_player, "Game reset");
        self.emit(GameEvent::Reset { starting_player });
    }

    /// Starts the next game, choosing the opener by the first-move policy.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Player {
        let starter = self.first_move.next_starter(self.state.starting_player());
        self.reset(starter);
        starter
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("first_move", &self.first_move)
            .field("allow_pending_undo", &self.allow_pending_undo)
            .field("scoreboard", &self.scoreboard)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_next_starter() {
        assert_eq!(
            FirstMovePolicy::Alternate.next_starter(Player::Human),
            Player::Computer
        );
        assert_eq!(
            FirstMovePolicy::Alternate.next_starter(Player::Computer),
            Player::Human
        );
        assert_eq!(FirstMovePolicy::Human.next_starter(Player::Human), Player::Human);
        assert_eq!(
            FirstMovePolicy::Computer.next_starter(Player::Human),
            Player::Computer
        );
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let mut session = GameSession::new();
        session.apply_move(4, Player::Human).unwrap();
        let before = session.state().clone();

        assert_eq!(
            session.apply_move(4, Player::Human),
            Err(IllegalMove::SquareOccupied(Position::Center))
        );
        assert_eq!(session.apply_move(9, Player::Human), Err(IllegalMove::OutOfRange(9)));
        assert_eq!(session.state(), &before);
    }
}
