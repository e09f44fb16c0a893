//! Configuration from environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `CHORES_BOARD` | No | built-in sample | Path to a JSON board seed file |
//! | `CHORES_LOG_DIR` | No | `~/.chores` | Directory for the log file |
//! | `CHORES_TICK_MS` | No | 60 | Event-loop tick interval in milliseconds |
//!
//! # Example
//!
//! ```no_run
//! use chores_tui::config::Config;
//!
//! let config = Config::from_env().expect("failed to load configuration");
//! println!("log dir: {}", config.log_dir.display());
//! ```

use std::env;
use std::path::PathBuf;

use directories::BaseDirs;
use thiserror::Error;

/// Default tick interval for the event loop (milliseconds).
const DEFAULT_TICK_MS: u64 = 60;

/// Default log directory name relative to home.
const DEFAULT_LOG_DIR: &str = ".chores";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The environment variable name.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// Home directory could not be determined.
    #[error("failed to determine home directory")]
    NoHomeDirectory,
}

/// Runtime configuration for the chores TUI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the board seed file, if one was configured.
    pub board_path: Option<PathBuf>,

    /// Directory the log file is written to.
    pub log_dir: PathBuf,

    /// Tick interval for the event loop.
    pub tick_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `CHORES_TICK_MS` is not a positive
    /// integer or the home directory cannot be determined for the default
    /// log location.
    pub fn from_env() -> Result<Self, ConfigError> {
        let board_path = env::var("CHORES_BOARD").ok().map(PathBuf::from);

        let log_dir = match env::var("CHORES_LOG_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => BaseDirs::new()
                .ok_or(ConfigError::NoHomeDirectory)?
                .home_dir()
                .join(DEFAULT_LOG_DIR),
        };

        let tick_ms = match env::var("CHORES_TICK_MS") {
            Ok(value) => {
                let parsed: u64 =
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue {
                            key: "CHORES_TICK_MS".to_string(),
                            message: format!("expected positive integer, got '{value}'"),
                        })?;
                if parsed == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "CHORES_TICK_MS".to_string(),
                        message: "tick interval must be greater than zero".to_string(),
                    });
                }
                parsed
            }
            Err(_) => DEFAULT_TICK_MS,
        };

        Ok(Self {
            board_path,
            log_dir,
            tick_ms,
        })
    }
}
