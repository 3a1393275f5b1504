//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::{Engine, Player, Seat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "perfect_games.toml";

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat that opens each round.
    #[serde(default = "default_first_to_move")]
    first_to_move: Seat,

    /// Mark the engine plays; the human gets the other one.
    #[serde(default = "default_engine_mark")]
    engine_mark: Player,

    /// Pause before the engine answers, in milliseconds.
    #[serde(default = "default_engine_delay_ms")]
    engine_delay_ms: u64,

    /// Where the terminal game writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_first_to_move() -> Seat {
    Seat::Player
}

fn default_engine_mark() -> Player {
    Player::O
}

fn default_engine_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("perfect_games.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_to_move: default_first_to_move(),
            engine_mark: default_engine_mark(),
            engine_delay_ms: default_engine_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(
            first_to_move = %config.first_to_move,
            engine_mark = %config.engine_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default file when it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing
    /// default file just means defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the opening seat.
    pub fn with_first_to_move(mut self, seat: Seat) -> Self {
        self.first_to_move = seat;
        self
    }

    /// Engine configured for this game.
    pub fn engine(&self) -> Engine {
        Engine::new(self.engine_mark)
    }

    /// Engine "thinking" pause.
    pub fn engine_delay(&self) -> Duration {
        Duration::from_millis(self.engine_delay_ms)
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
