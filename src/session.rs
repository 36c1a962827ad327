//! Many independent game sessions behind one handle.
//!
//! A [`GameSession`] is not built for concurrent access. The manager keeps
//! each session behind a mutex so only one operation per session is in
//! flight at a time, and sessions never share state with each other.

use crate::config::GameConfig;
use crate::games::tictactoe::GameSession;
use derive_more::Display;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

type SharedSession = Arc<Mutex<GameSession>>;

/// Session lookup or locking failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// A session with this id already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),

    /// No session with this id.
    #[display("Session {} not found", _0)]
    NotFound(SessionId),

    /// A previous operation panicked while holding the lock.
    #[display("Session state is poisoned")]
    Poisoned,
}

impl std::error::Error for SessionError {}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, SharedSession>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SharedSession>>, SessionError> {
        self.sessions.lock().map_err(|_| SessionError::Poisoned)
    }

    /// Creates a new session configured by `config`.
    #[instrument(skip(self, config))]
    pub fn create_session(&self, id: SessionId, config: &GameConfig) -> Result<SessionId, SessionError> {
        let mut sessions = self.table()?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        sessions.insert(id.clone(), Arc::new(Mutex::new(config.new_session())));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Runs `f` with exclusive access to one session.
    ///
    /// Only that session is locked while `f` runs; other sessions stay
    /// available.
    #[instrument(skip(self, f))]
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, SessionError> {
        let session = self
            .table()?
            .get(id)
            .cloned()
            .ok_or_else(|| {
                debug!(session_id = id, "Session not found");
                SessionError::NotFound(id.to_string())
            })?;

        let mut guard = session.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&mut *guard))
    }

    /// Removes a session, returning whether it existed.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<bool, SessionError> {
        let removed = self.table()?.remove(id).is_some();
        info!(session_id = id, removed, "Removed session");
        Ok(removed)
    }

    /// Lists all session ids, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let mut ids: Vec<_> = self.table()?.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}
