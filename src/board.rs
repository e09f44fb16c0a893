//! Two-list board state: the core of the chores interface.
//!
//! This module holds the model that the TUI renders and mutates:
//!
//! - [`ChoreList`]: one ordered collection of [`Chore`]s sharing a category,
//!   with a registered peer to hand outgoing moves to
//! - [`Board`]: the explicitly constructed context owning both lists, with
//!   their peers cross-registered at construction
//!
//! Moving a chore is an ownership transfer: the source list gives the chore
//! up via [`ChoreList::take_chore`] and the destination receives it via
//! [`ChoreList::add_chore`], which retags it to the destination's category.
//! The board maintains the union invariant: every chore belongs to exactly
//! one of the two lists, and ids are unique across both (guaranteed at seed
//! time, see [`crate::seed`]).
//!
//! # Example
//!
//! ```
//! use chores_tui::board::Board;
//! use chores_tui::types::{Category, Chore};
//!
//! let mut board = Board::new();
//! board.list_mut(Category::Active).add_chore(Chore::new("task-1", "Dishes", ""));
//!
//! board.switch_chore(Category::Active, "task-1").unwrap();
//! assert_eq!(board.list(Category::Finished).len(), 1);
//! ```

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{Category, Chore};

/// Errors raised by board operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The requested id was not found in the expected collection.
    ///
    /// Given the union invariant this indicates a defect (a duplicated or
    /// lost chore), not a user-recoverable condition.
    #[error("chore '{id}' not found in the {category} list")]
    UnknownChore {
        /// Id that failed to resolve.
        id: String,
        /// List the lookup ran against.
        category: Category,
    },
}

/// Outcome of dropping a dragged chore onto a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The chore was moved into the target list.
    Moved,
    /// The chore already belonged to the target list; nothing changed.
    Ignored,
}

/// One ordered collection of chores sharing a category.
#[derive(Debug, Clone, Default)]
pub struct ChoreList {
    category: Category,
    chores: Vec<Chore>,
    peer: Option<Category>,
    /// Index of the most recently added chore, used by the UI as a
    /// scroll-into-view cue. Cleared once the view has consumed it.
    landed: Option<usize>,
}

impl ChoreList {
    /// Creates an empty list for the given category.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            chores: Vec::new(),
            peer: None,
            landed: None,
        }
    }

    /// Returns this list's category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Registers the category this list delegates outgoing moves to.
    ///
    /// Must be set before the first move; [`Board::new`] cross-registers
    /// both lists so callers normally never do this themselves.
    pub fn register_peer(&mut self, peer: Category) {
        self.peer = Some(peer);
    }

    /// Returns the registered peer category, if any.
    #[must_use]
    pub fn peer(&self) -> Option<Category> {
        self.peer
    }

    /// Returns the chores in display order.
    #[must_use]
    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    /// Returns the number of chores in this list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chores.len()
    }

    /// Returns `true` if this list holds no chores.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chores.is_empty()
    }

    /// Returns `true` if a chore with the given id belongs to this list.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.chores.iter().any(|c| c.id == id)
    }

    /// Returns the chore with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Chore> {
        self.chores.iter().find(|c| c.id == id)
    }

    /// Appends a chore to this list, retagging it to this category.
    ///
    /// This is the landing half of a move: the chore's category tag and
    /// switch-control label now reflect this list, its `finished_at` stamp
    /// is set or cleared accordingly, and the landed index is recorded as a
    /// scroll-into-view cue for the UI.
    pub fn add_chore(&mut self, mut chore: Chore) {
        chore.category = self.category;
        chore.finished_at = match self.category {
            Category::Finished => Some(Local::now()),
            Category::Active => None,
        };
        debug!(id = %chore.id, category = %self.category, "chore landed");
        self.chores.push(chore);
        self.landed = Some(self.chores.len() - 1);
    }

    /// Removes and returns the chore with the given id.
    ///
    /// Removal is by id equality; the first (only) match is used.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownChore`] if no chore with this id belongs
    /// to the list. Under the union invariant that should never happen.
    pub fn take_chore(&mut self, id: &str) -> Result<Chore, BoardError> {
        let index = self
            .chores
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| BoardError::UnknownChore {
                id: id.to_string(),
                category: self.category,
            })?;
        Ok(self.chores.remove(index))
    }

    /// Takes the pending scroll-into-view cue, if one was recorded.
    pub fn take_landed(&mut self) -> Option<usize> {
        self.landed.take()
    }
}

/// The two-list application context.
///
/// Owns the active and finished [`ChoreList`]s and cross-registers each as
/// the other's peer at construction, so a move out of one always delivers
/// into the other. This replaces the ambient wiring of the switch handlers
/// with an explicit context passed by reference.
#[derive(Debug, Clone)]
pub struct Board {
    active: ChoreList,
    finished: ChoreList,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with both lists cross-registered.
    #[must_use]
    pub fn new() -> Self {
        let mut active = ChoreList::new(Category::Active);
        let mut finished = ChoreList::new(Category::Finished);
        active.register_peer(Category::Finished);
        finished.register_peer(Category::Active);
        Self { active, finished }
    }

    /// Creates a board from pre-sorted chores.
    ///
    /// Each chore lands in the list matching its category tag. Id uniqueness
    /// across the input is the caller's responsibility (the seed loader
    /// rejects duplicates before this point).
    #[must_use]
    pub fn from_chores(chores: Vec<Chore>) -> Self {
        let mut board = Self::new();
        for chore in chores {
            board.list_mut(chore.category).add_chore(chore);
        }
        // Seeding is not a move; drop the scroll cues it produced.
        board.active.take_landed();
        board.finished.take_landed();
        board
    }

    /// Returns the list for the given category.
    #[must_use]
    pub fn list(&self, category: Category) -> &ChoreList {
        match category {
            Category::Active => &self.active,
            Category::Finished => &self.finished,
        }
    }

    /// Returns the list for the given category, mutably.
    pub fn list_mut(&mut self, category: Category) -> &mut ChoreList {
        match category {
            Category::Active => &mut self.active,
            Category::Finished => &mut self.finished,
        }
    }

    /// Returns the total number of chores across both lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.finished.len()
    }

    /// Returns `true` if neither list holds any chores.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.finished.is_empty()
    }

    /// Returns the category of the list the chore currently belongs to.
    #[must_use]
    pub fn locate(&self, id: &str) -> Option<Category> {
        if self.active.contains(id) {
            Some(Category::Active)
        } else if self.finished.contains(id) {
            Some(Category::Finished)
        } else {
            None
        }
    }

    /// Moves the chore with the given id out of `from` into its peer list.
    ///
    /// This is the switch-control path: the chore is taken from the source
    /// list and delivered to the registered peer's [`ChoreList::add_chore`],
    /// which retags it. Returns the category the chore landed in.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownChore`] if the id does not belong to the
    /// `from` list.
    pub fn switch_chore(&mut self, from: Category, id: &str) -> Result<Category, BoardError> {
        // Both peers are registered in `new`; fall back to the toggle so a
        // hand-built list without a peer still moves somewhere sensible.
        let peer = self.list(from).peer().unwrap_or_else(|| from.toggle());
        let chore = self.list_mut(from).take_chore(id)?;
        info!(id = %chore.id, from = %from, to = %peer, "switching chore");
        self.list_mut(peer).add_chore(chore);
        Ok(peer)
    }

    /// Handles a dragged chore being dropped onto the `target` list.
    ///
    /// If the id already belongs to the target's own collection the drop is
    /// ignored, preventing self-drop duplication. Otherwise the move is
    /// delegated to the existing switch path out of the chore's current
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownChore`] if the id belongs to neither
    /// list, which indicates a broken invariant.
    pub fn drop_chore(&mut self, target: Category, id: &str) -> Result<DropOutcome, BoardError> {
        if self.list(target).contains(id) {
            debug!(id, target = %target, "drop onto own list ignored");
            return Ok(DropOutcome::Ignored);
        }
        let from = self.locate(id).ok_or_else(|| BoardError::UnknownChore {
            id: id.to_string(),
            category: target,
        })?;
        self.switch_chore(from, id)?;
        Ok(DropOutcome::Moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let mut finished = Chore::new("task-3", "Take out trash", "Bins are out back");
        finished.category = Category::Finished;
        Board::from_chores(vec![
            Chore::new("task-1", "Water plants", "Use the small can"),
            Chore::new("task-2", "Do the dishes", "Dishwasher is broken"),
            finished,
        ])
    }

    #[test]
    fn from_chores_sorts_by_category() {
        let board = sample_board();
        assert_eq!(board.list(Category::Active).len(), 2);
        assert_eq!(board.list(Category::Finished).len(), 1);
        assert!(board.list(Category::Active).contains("task-1"));
        assert!(board.list(Category::Finished).contains("task-3"));
    }

    #[test]
    fn new_board_cross_registers_peers() {
        let board = Board::new();
        assert_eq!(board.list(Category::Active).peer(), Some(Category::Finished));
        assert_eq!(board.list(Category::Finished).peer(), Some(Category::Active));
    }

    #[test]
    fn switch_moves_exactly_one_chore() {
        let mut board = sample_board();
        let landed = board.switch_chore(Category::Active, "task-1").unwrap();

        assert_eq!(landed, Category::Finished);
        assert_eq!(board.list(Category::Active).len(), 1);
        assert_eq!(board.list(Category::Finished).len(), 2);
        assert!(!board.list(Category::Active).contains("task-1"));

        let moved = board.list(Category::Finished).get("task-1").unwrap();
        assert_eq!(moved.category, Category::Finished);
        assert_eq!(moved.switch_label(), "Activate");
        assert!(moved.finished_at.is_some());
    }

    #[test]
    fn reactivating_clears_finished_stamp() {
        let mut board = sample_board();
        board.switch_chore(Category::Finished, "task-3").unwrap();

        let back = board.list(Category::Active).get("task-3").unwrap();
        assert_eq!(back.category, Category::Active);
        assert_eq!(back.switch_label(), "Finish");
        assert!(back.finished_at.is_none());
    }

    #[test]
    fn union_invariant_holds_across_move_sequences() {
        let mut board = sample_board();
        let ids = ["task-1", "task-2", "task-3"];

        for step in 0..10 {
            let id = ids[step % ids.len()];
            let from = board.locate(id).unwrap();
            board.switch_chore(from, id).unwrap();

            assert_eq!(board.len(), 3, "no chore lost or duplicated");
            for id in ids {
                let in_active = board.list(Category::Active).contains(id);
                let in_finished = board.list(Category::Finished).contains(id);
                assert!(in_active ^ in_finished, "{id} must be in exactly one list");
            }
        }
    }

    #[test]
    fn moved_chore_lands_at_end_of_destination() {
        let mut board = sample_board();
        board.switch_chore(Category::Active, "task-1").unwrap();

        let finished: Vec<&str> = board
            .list(Category::Finished)
            .chores()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(finished, ["task-3", "task-1"]);
    }

    #[test]
    fn add_chore_records_scroll_cue() {
        let mut board = sample_board();
        board.switch_chore(Category::Active, "task-2").unwrap();

        let cue = board.list_mut(Category::Finished).take_landed();
        assert_eq!(cue, Some(1));
        // The cue is consumed once.
        assert_eq!(board.list_mut(Category::Finished).take_landed(), None);
    }

    #[test]
    fn switch_unknown_id_is_an_error() {
        let mut board = sample_board();
        let err = board.switch_chore(Category::Active, "task-99").unwrap_err();
        assert_eq!(
            err,
            BoardError::UnknownChore {
                id: "task-99".to_string(),
                category: Category::Active,
            }
        );
        assert_eq!(
            err.to_string(),
            "chore 'task-99' not found in the active list"
        );
    }

    #[test]
    fn drop_onto_own_list_is_ignored() {
        let mut board = sample_board();
        let outcome = board.drop_chore(Category::Active, "task-1").unwrap();

        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(board.list(Category::Active).len(), 2);
        assert_eq!(board.list(Category::Finished).len(), 1);
    }

    #[test]
    fn drop_onto_other_list_delegates_to_switch() {
        let mut board = sample_board();
        let outcome = board.drop_chore(Category::Active, "task-3").unwrap();

        assert_eq!(outcome, DropOutcome::Moved);
        assert!(board.list(Category::Active).contains("task-3"));
        assert!(!board.list(Category::Finished).contains("task-3"));
    }

    #[test]
    fn drop_of_unknown_id_is_an_error() {
        let mut board = sample_board();
        let err = board.drop_chore(Category::Active, "ghost").unwrap_err();
        assert!(matches!(err, BoardError::UnknownChore { .. }));
    }

    #[test]
    fn take_chore_preserves_remaining_order() {
        let mut board = sample_board();
        board.list_mut(Category::Active).take_chore("task-1").unwrap();

        let remaining: Vec<&str> = board
            .list(Category::Active)
            .chores()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(remaining, ["task-2"]);
    }

    #[test]
    fn seeding_does_not_leave_scroll_cues() {
        let mut board = sample_board();
        assert_eq!(board.list_mut(Category::Active).take_landed(), None);
        assert_eq!(board.list_mut(Category::Finished).take_landed(), None);
    }
}
