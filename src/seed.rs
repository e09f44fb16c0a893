//! Board seeding from a JSON file or the built-in sample.
//!
//! The board is populated once at startup, either from a seed file (a JSON
//! array of chores) or from [`sample_chores`] when no file is configured.
//! Chores are never written back; the seed is read-only input.
//!
//! Id uniqueness across both categories is a hard precondition of the board
//! invariants, so duplicate ids in the seed are rejected here rather than
//! detected later as broken lookups.
//!
//! # Seed format
//!
//! ```json
//! [
//!   { "id": "task-1", "title": "Water plants", "info": "Use the small can" },
//!   { "id": "task-2", "title": "Dust shelves", "category": "finished" }
//! ]
//! ```
//!
//! `info` defaults to empty and `category` to `active`.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::board::Board;
use crate::types::{Category, Chore};

/// Errors that can occur while loading a board seed.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid JSON or does not match the seed format.
    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),

    /// Two chores in the seed share an id.
    #[error("duplicate chore id in seed: '{id}'")]
    DuplicateId {
        /// The id that appeared more than once.
        id: String,
    },
}

/// Builds a board from a list of seed chores, rejecting duplicate ids.
///
/// # Errors
///
/// Returns [`SeedError::DuplicateId`] if two chores share an id.
pub fn board_from_chores(chores: Vec<Chore>) -> Result<Board, SeedError> {
    let mut seen = HashSet::new();
    for chore in &chores {
        if !seen.insert(chore.id.clone()) {
            return Err(SeedError::DuplicateId {
                id: chore.id.clone(),
            });
        }
    }
    Ok(Board::from_chores(chores))
}

/// Loads a board from a JSON seed file.
///
/// # Errors
///
/// Returns a [`SeedError`] if the file cannot be read, is not valid JSON,
/// or contains duplicate ids.
pub fn load_board(path: &Path) -> Result<Board, SeedError> {
    let contents = std::fs::read_to_string(path)?;
    let chores: Vec<Chore> = serde_json::from_str(&contents)?;
    info!(path = %path.display(), count = chores.len(), "loaded board seed");
    board_from_chores(chores)
}

/// Returns the built-in sample chores used when no seed file is configured.
#[must_use]
pub fn sample_chores() -> Vec<Chore> {
    let mut dusted = Chore::new("task-4", "Dust the shelves", "Top shelf included");
    dusted.category = Category::Finished;
    vec![
        Chore::new("task-1", "Water the plants", "The fern needs extra water"),
        Chore::new("task-2", "Do the dishes", "Dishwasher is broken, wash by hand"),
        Chore::new("task-3", "Vacuum the hallway", "Bag is almost full"),
        dusted,
    ]
}

/// Returns the built-in sample seed as pretty-printed JSON.
///
/// Printed by the `sample` subcommand so users have a template to start a
/// seed file from.
///
/// # Errors
///
/// Returns a [`SeedError::Json`] if serialization fails, which should not
/// happen for the built-in data.
pub fn sample_json() -> Result<String, SeedError> {
    Ok(serde_json::to_string_pretty(&sample_chores())?)
}
