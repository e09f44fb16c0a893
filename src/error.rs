//! Error types for the chores TUI.
//!
//! This module defines the top-level error type for the crate, wrapping the
//! per-module errors ([`ConfigError`](crate::config::ConfigError),
//! [`BoardError`](crate::board::BoardError),
//! [`SeedError`](crate::seed::SeedError)) plus the TUI-specific failures.

use thiserror::Error;

use crate::board::BoardError;
use crate::config::ConfigError;
use crate::seed::SeedError;

/// Errors that can occur while running the chores TUI.
#[derive(Error, Debug)]
pub enum ChoresError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Board seed loading error.
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    /// Board state error.
    ///
    /// Board lookups fail only when the union invariant is broken, so this
    /// variant indicates a defect rather than a user-recoverable condition.
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TUI-related error.
    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors that can occur during TUI operation.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal initialization failed.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    /// Terminal rendering failed.
    #[error("render error: {0}")]
    Render(#[source] std::io::Error),

    /// The event channel closed unexpectedly.
    #[error("event channel closed")]
    ChannelClosed,
}

/// A specialized `Result` type for chores operations.
pub type Result<T> = std::result::Result<T, ChoresError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn board_error_display() {
        let err = ChoresError::Board(BoardError::UnknownChore {
            id: "task-1".to_string(),
            category: Category::Finished,
        });
        assert_eq!(
            err.to_string(),
            "board error: chore 'task-1' not found in the finished list"
        );
    }

    #[test]
    fn config_error_conversion() {
        let config_err = ConfigError::NoHomeDirectory;
        let err: ChoresError = config_err.into();
        assert!(matches!(err, ChoresError::Config(_)));
        assert_eq!(
            err.to_string(),
            "configuration error: failed to determine home directory"
        );
    }

    #[test]
    fn io_error_conversion_preserves_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChoresError = io_err.into();
        assert!(matches!(err, ChoresError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn tui_error_terminal_init_display() {
        let io_err = std::io::Error::other("raw mode failed");
        let err = TuiError::TerminalInit(io_err);
        assert_eq!(
            err.to_string(),
            "failed to initialize terminal: raw mode failed"
        );
    }

    #[test]
    fn tui_error_channel_closed_display() {
        let err: ChoresError = TuiError::ChannelClosed.into();
        assert_eq!(err.to_string(), "TUI error: event channel closed");
    }

    #[test]
    fn seed_error_conversion() {
        let seed_err = crate::seed::SeedError::DuplicateId {
            id: "task-1".to_string(),
        };
        let err: ChoresError = seed_err.into();
        assert_eq!(
            err.to_string(),
            "seed error: duplicate chore id in seed: 'task-1'"
        );
    }
}
