//! Chores TUI - an interactive two-list chores board for the terminal.
//!
//! Chores live in one of two ordered collections, `active` and `finished`,
//! and move between them via their switch control (`Finish` / `Activate`)
//! or a grab-and-drop gesture across the panes. Each chore carries an
//! annotation shown in a transient tooltip overlay.
//!
//! The board is seeded once at startup from a JSON file (or a built-in
//! sample) and is never persisted; every chore belongs to exactly one of
//! the two lists at all times.
//!
//! # Modules
//!
//! - [`types`]: the chore and category data model
//! - [`board`]: the two-list state core with cross-registered peers
//! - [`seed`]: board seeding from JSON or the built-in sample
//! - [`config`]: configuration from environment variables
//! - [`error`]: error types
//! - [`tui`]: the terminal interface (state, event loop, rendering)

pub mod board;
pub mod config;
pub mod error;
pub mod seed;
pub mod tui;
pub mod types;

pub use board::{Board, BoardError, ChoreList, DropOutcome};
pub use config::Config;
pub use error::{ChoresError, Result};
pub use seed::{load_board, sample_chores, SeedError};
pub use types::{Category, Chore};
