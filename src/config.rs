//! Game configuration.

use crate::games::tictactoe::{FirstMovePolicy, GameSession, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a session and the driver playing it.
///
/// Every field is optional in TOML and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Label shown for the human.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Who opens the first game.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Who opens each following game.
    #[serde(default)]
    first_move: FirstMovePolicy,

    /// Pause before the computer's move is presented, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Whether a human move may be taken back before the computer replies.
    #[serde(default = "default_allow_pending_undo")]
    allow_pending_undo: bool,
}

fn default_human_name() -> String {
    "Player".to_string()
}

fn default_first_player() -> Player {
    Player::Human
}

fn default_think_delay_ms() -> u64 {
    500
}

fn default_allow_pending_undo() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            first_player: default_first_player(),
            first_move: FirstMovePolicy::default(),
            think_delay_ms: default_think_delay_ms(),
            allow_pending_undo: default_allow_pending_undo(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_player = ?config.first_player, first_move = ?config.first_move, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Sets who opens the first game.
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Sets the computer's thinking delay.
    pub fn with_think_delay_ms(mut self, think_delay_ms: u64) -> Self {
        self.think_delay_ms = think_delay_ms;
        self
    }

    /// Sets the restart policy.
    pub fn with_first_move(mut self, first_move: FirstMovePolicy) -> Self {
        self.first_move = first_move;
        self
    }

    /// Sets whether pending human moves may be undone.
    pub fn with_allow_pending_undo(mut self, allow_pending_undo: bool) -> Self {
        self.allow_pending_undo = allow_pending_undo;
        self
    }

    /// Thinking delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Creates a fresh session following these settings.
    #[instrument(skip(self))]
    pub fn new_session(&self) -> GameSession {
        GameSession::with_rules(self.first_player, self.first_move, self.allow_pending_undo)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
