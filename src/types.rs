//! Core data model for the chores board.
//!
//! A [`Chore`] is a task-like entity with a unique id, a title shown in the
//! list, a free-text annotation shown in the info tooltip, and a [`Category`]
//! tag that determines which of the two collections it belongs to. Chores are
//! created at startup from the seed file and are never destroyed, only moved
//! between categories.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Category tag for a chore: which of the two collections it belongs to.
///
/// The category also determines the label of the chore's switch control:
/// an active chore offers `Finish`, a finished chore offers `Activate`.
///
/// # Example
///
/// ```
/// use chores_tui::types::Category;
///
/// assert_eq!(Category::Active.switch_label(), "Finish");
/// assert_eq!(Category::Finished.switch_label(), "Activate");
/// assert_eq!(Category::Active.toggle(), Category::Finished);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Chores still to be done.
    #[default]
    Active,
    /// Chores already completed.
    Finished,
}

impl Category {
    /// Returns the opposite category.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Category::Active => Category::Finished,
            Category::Finished => Category::Active,
        }
    }

    /// Returns the label of the switch control for a chore in this category.
    ///
    /// The control always offers the inverse action: `Finish` for an active
    /// chore, `Activate` for a finished one.
    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            Category::Active => "Finish",
            Category::Finished => "Activate",
        }
    }

    /// Returns the display title of this category's pane.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Active => "Active",
            Category::Finished => "Finished",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Active => write!(f, "active"),
            Category::Finished => write!(f, "finished"),
        }
    }
}

/// A single chore on the board.
///
/// The id is unique across both collections; this is a hard precondition
/// enforced when the board is seeded (see [`crate::seed`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    /// Unique identifier, e.g. `task-1`.
    pub id: String,

    /// Short title shown in the list row.
    pub title: String,

    /// Free-text annotation shown in the info tooltip.
    #[serde(default)]
    pub info: String,

    /// Which collection this chore currently belongs to.
    #[serde(default)]
    pub category: Category,

    /// When the chore last landed in the finished collection.
    ///
    /// Stamped by the finished list on arrival and cleared again when the
    /// chore is reactivated. Not part of the seed format.
    #[serde(skip)]
    pub finished_at: Option<DateTime<Local>>,
}

impl Chore {
    /// Creates a new active chore with the given id, title, and annotation.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            info: info.into(),
            category: Category::Active,
            finished_at: None,
        }
    }

    /// Returns the switch-control label for this chore's current category.
    #[must_use]
    pub fn switch_label(&self) -> &'static str {
        self.category.switch_label()
    }
}
