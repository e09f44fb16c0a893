//! Application state and event management for the chores TUI.
//!
//! The interface is event-driven: every state change is triggered by a
//! [`TuiEvent`] processed on the main loop. The central types are:
//!
//! - [`AppState`]: the board plus all view state (focus, selections, drag,
//!   tooltip), mutated by key events
//! - [`TuiEvent`] / [`EventHandler`]: the async loop multiplexing terminal
//!   input and periodic ticks onto an MPSC channel
//! - [`App`]: owns the state, draws frames, and dispatches events until the
//!   user quits
//!
//! # Gestures
//!
//! The pointer gestures of a two-list drag-and-drop widget map onto keys:
//!
//! - `Tab`/`h`/`l`: move focus between the two panes; while a chore is
//!   grabbed this doubles as drag-enter/leave, toggling the receptive
//!   highlight on the pane under focus
//! - `Enter`/`f`: activate the selected chore's switch control (`Finish` /
//!   `Activate`), or drop the grabbed chore onto the focused pane
//! - `g`/`Space`: grab the selected chore (drag start, carrying its id), or
//!   drop it
//! - `i`: show the selected chore's info tooltip; pressing it again while
//!   that tooltip is open is a no-op
//! - `Esc`: close the tooltip, or abandon a grab with no state change
//! - `q`: quit

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::board::{Board, BoardError, DropOutcome};
use crate::error::{Result, TuiError};
use crate::tui::terminal::Tui;
use crate::tui::ui;
use crate::types::Category;

// =============================================================================
// Theme and Symbols
// =============================================================================

/// Theme configuration for the TUI.
///
/// Use [`Theme::monochrome`] (or [`Theme::from_env`], which honors the
/// [NO_COLOR standard](https://no-color.org/)) for terminals without color.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for pane and footer titles.
    pub title: Style,
    /// Style for unfocused pane borders.
    pub border: Style,
    /// Style for the focused pane border.
    pub border_focused: Style,
    /// Style for a pane marked as a receptive drop target.
    pub border_droppable: Style,
    /// Style for the selected row.
    pub selection: Style,
    /// Style for the grabbed (dragged) chore's row.
    pub grabbed: Style,
    /// Style for the switch-control label hint.
    pub switch_hint: Style,
    /// Style for the tooltip body.
    pub tooltip: Style,
    /// Style for primary text.
    pub text_primary: Style,
    /// Style for secondary/deemphasized text.
    pub text_muted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            border_droppable: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            selection: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            grabbed: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
            switch_hint: Style::default().fg(Color::Magenta),
            tooltip: Style::default().fg(Color::Black).bg(Color::Yellow),
            text_primary: Style::default(),
            text_muted: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Creates a monochrome theme using only modifiers, no color codes.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            border: Style::default(),
            border_focused: Style::default().add_modifier(Modifier::BOLD),
            border_droppable: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            selection: Style::default().add_modifier(Modifier::REVERSED),
            grabbed: Style::default().add_modifier(Modifier::ITALIC),
            switch_hint: Style::default().add_modifier(Modifier::DIM),
            tooltip: Style::default().add_modifier(Modifier::REVERSED),
            text_primary: Style::default(),
            text_muted: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Returns [`Theme::monochrome`] if `NO_COLOR` is set, the default
    /// colorful theme otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }
}

/// Symbol set for the TUI (unicode or ASCII).
#[derive(Debug, Clone, Copy)]
pub struct Symbols {
    /// Bullet in front of each active chore row.
    pub bullet: &'static str,
    /// Drag handle shown on the grabbed chore.
    pub handle: &'static str,
    /// Marker in front of each finished chore row.
    pub done: &'static str,
    /// Marker appended to a pane title while it is a receptive drop target.
    pub drop_marker: &'static str,
    /// Separator in the footer hints.
    pub separator: &'static str,
}

/// Unicode symbol set for modern terminals.
pub const UNICODE_SYMBOLS: Symbols = Symbols {
    bullet: "•",
    handle: "✥",
    done: "✓",
    drop_marker: "⇣",
    separator: "·",
};

/// ASCII symbol set for maximum compatibility.
pub const ASCII_SYMBOLS: Symbols = Symbols {
    bullet: "*",
    handle: "#",
    done: "x",
    drop_marker: "v",
    separator: "|",
};

impl Symbols {
    /// Picks the symbol set for the current terminal based on `TERM`.
    ///
    /// The Linux console and VT100 emulators get ASCII; everything else
    /// (including an unset `TERM`) gets unicode.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::var("TERM")
            .map(|t| t.contains("linux") || t.contains("vt100"))
            .unwrap_or(false)
        {
            ASCII_SYMBOLS
        } else {
            UNICODE_SYMBOLS
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::detect()
    }
}

// =============================================================================
// View State
// =============================================================================

/// An in-flight grab: the dragged chore's id and the list it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    /// Id of the grabbed chore (the transferred payload).
    pub id: String,
    /// List the chore belonged to when grabbed.
    pub origin: Category,
}

/// An open tooltip, bound to the chore that spawned it.
///
/// At most one tooltip is open at a time; a request for a different chore
/// supersedes the current one, a request for the same chore is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipState {
    /// Id of the chore the tooltip belongs to.
    pub chore_id: String,
    /// Annotation text shown in the overlay.
    pub text: String,
}

/// Application state for the chores TUI.
///
/// Owns the [`Board`] (the two cross-registered chore lists) and all view
/// state. All mutation happens through [`AppState::handle_key`], which runs
/// to completion per event; there is no concurrency against the model.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The two-list board.
    pub board: Board,
    /// Pane currently holding keyboard focus.
    pub focus: Category,
    /// Selected row per pane, indexed by [`pane_index`].
    selected: [usize; 2],
    /// In-flight grab, if any.
    pub drag: Option<DragState>,
    /// Pane currently marked as a receptive drop target.
    pub drop_hint: Option<Category>,
    /// Open tooltip, if any.
    pub tooltip: Option<TooltipState>,
    /// Flag indicating the user requested exit.
    should_quit: bool,
    /// Theme configuration.
    pub theme: Theme,
    /// Symbol set (unicode or ASCII).
    pub symbols: Symbols,
}

/// Maps a category to its index in per-pane state arrays.
#[must_use]
pub fn pane_index(category: Category) -> usize {
    match category {
        Category::Active => 0,
        Category::Finished => 1,
    }
}

impl AppState {
    /// Creates the state for a seeded board, focused on the active pane.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            focus: Category::Active,
            selected: [0; 2],
            drag: None,
            drop_hint: None,
            tooltip: None,
            should_quit: false,
            theme: Theme::from_env(),
            symbols: Symbols::detect(),
        }
    }

    /// Returns `true` if the application should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals that the application should quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns the selected row in the given pane, if the pane is non-empty.
    #[must_use]
    pub fn selected(&self, category: Category) -> Option<usize> {
        let len = self.board.list(category).len();
        if len == 0 {
            None
        } else {
            Some(self.selected[pane_index(category)].min(len - 1))
        }
    }

    /// Returns the id of the selected chore in the focused pane.
    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        let index = self.selected(self.focus)?;
        self.board
            .list(self.focus)
            .chores()
            .get(index)
            .map(|c| c.id.clone())
    }

    /// Moves focus to the other pane.
    ///
    /// While a chore is grabbed this is the drag-enter/leave path: the pane
    /// gaining focus becomes the receptive drop target and the pane losing
    /// it is unmarked.
    pub fn focus_other_pane(&mut self) {
        self.focus = self.focus.toggle();
        if self.drag.is_some() {
            self.drop_hint = Some(self.focus);
        }
    }

    /// Moves the selection in the focused pane by `delta` rows, clamped.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.board.list(self.focus).len();
        if len == 0 {
            return;
        }
        let index = pane_index(self.focus);
        let current = self.selected[index].min(len - 1) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.selected[index] = next as usize;
    }

    /// Shows the info tooltip for the selected chore.
    ///
    /// A request while that chore's tooltip is already open is a silent
    /// no-op, keeping exactly one tooltip per chore. A request for a
    /// different chore supersedes the open tooltip.
    pub fn request_info(&mut self) {
        let Some(index) = self.selected(self.focus) else {
            return;
        };
        let chore = &self.board.list(self.focus).chores()[index];
        if self
            .tooltip
            .as_ref()
            .is_some_and(|t| t.chore_id == chore.id)
        {
            debug!(id = %chore.id, "tooltip already open, ignoring request");
            return;
        }
        self.tooltip = Some(TooltipState {
            chore_id: chore.id.clone(),
            text: if chore.info.is_empty() {
                "No extra info.".to_string()
            } else {
                chore.info.clone()
            },
        });
    }

    /// Closes the open tooltip, clearing the chore's active-tooltip state.
    pub fn close_tooltip(&mut self) {
        self.tooltip = None;
    }

    /// Grabs the selected chore, starting a drag carrying its id.
    ///
    /// The pane under focus (the origin) is immediately the pane the drag
    /// is over, so it becomes the marked drop target.
    pub fn grab(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        debug!(id, origin = %self.focus, "grab started");
        self.drag = Some(DragState {
            id,
            origin: self.focus,
        });
        self.drop_hint = Some(self.focus);
    }

    /// Drops the grabbed chore onto the focused pane.
    ///
    /// Dropping onto the list the chore already belongs to is ignored;
    /// otherwise the move is delegated to the switch path. Either way the
    /// drag ends and the receptive marker is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownChore`] if the dragged id belongs to
    /// neither list, which indicates a broken invariant.
    pub fn drop_grabbed(&mut self) -> std::result::Result<(), BoardError> {
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };
        self.drop_hint = None;

        match self.board.drop_chore(self.focus, &drag.id)? {
            DropOutcome::Moved => self.follow_landed(self.focus),
            DropOutcome::Ignored => {
                debug!(id = %drag.id, "self-drop ignored");
            }
        }
        self.clamp_selections();
        Ok(())
    }

    /// Abandons the grab with no state change (the drag's cancel path).
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.drop_hint = None;
        }
    }

    /// Activates the switch control of the selected chore, moving it to the
    /// peer list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownChore`] if the selected id is missing
    /// from the focused list, which indicates a broken invariant.
    pub fn activate_switch(&mut self) -> std::result::Result<(), BoardError> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let landed = self.board.switch_chore(self.focus, &id)?;
        self.follow_landed(landed);
        self.clamp_selections();
        Ok(())
    }

    /// Consumes the destination list's scroll cue, selecting the landed row
    /// so the view scrolls it into view.
    fn follow_landed(&mut self, landed: Category) {
        if let Some(index) = self.board.list_mut(landed).take_landed() {
            self.selected[pane_index(landed)] = index;
        }
    }

    /// Clamps both selections after the lists changed size.
    fn clamp_selections(&mut self) {
        for category in [Category::Active, Category::Finished] {
            let len = self.board.list(category).len();
            let index = pane_index(category);
            if len == 0 {
                self.selected[index] = 0;
            } else {
                self.selected[index] = self.selected[index].min(len - 1);
            }
        }
    }

    /// Processes a key event, running the triggered operation to completion.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`]s from move operations; these only occur
    /// when the union invariant is broken.
    pub fn handle_key(&mut self, key: KeyEvent) -> std::result::Result<(), BoardError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        // A click anywhere on the open tooltip closes it. Keys that don't
        // address the tooltip close it before doing their own work.
        if self.tooltip.is_some() {
            match key.code {
                KeyCode::Char('i') => {
                    self.request_info();
                    return Ok(());
                }
                KeyCode::Char('q') => {
                    self.quit();
                    return Ok(());
                }
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
                    self.close_tooltip();
                    return Ok(());
                }
                _ => self.close_tooltip(),
            }
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus_other_pane();
            }
            KeyCode::Char('h') | KeyCode::Char('l') => self.focus_other_pane(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Enter | KeyCode::Char('f') => {
                if self.drag.is_some() {
                    self.drop_grabbed()?;
                } else {
                    self.activate_switch()?;
                }
            }
            KeyCode::Char('g') | KeyCode::Char(' ') => {
                if self.drag.is_some() {
                    self.drop_grabbed()?;
                } else {
                    self.grab();
                }
            }
            KeyCode::Char('i') => self.request_info(),
            KeyCode::Esc => self.cancel_drag(),
            _ => {}
        }
        Ok(())
    }
}

// =============================================================================
// Event Loop
// =============================================================================

/// Events that drive the TUI event loop.
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Periodic tick for timers and redraw pacing.
    Tick,
    /// Terminal key input.
    Key(KeyEvent),
    /// Terminal resize to (columns, rows).
    Resize(u16, u16),
}

/// Default tick rate for the event handler.
pub const DEFAULT_TICK_RATE_MS: u64 = 60;

/// Poll timeout for checking terminal input.
///
/// Kept short so the loop stays responsive to shutdown while batching
/// input efficiently.
const POLL_TIMEOUT_MS: u64 = 10;

/// Async event loop multiplexing terminal input and periodic ticks.
///
/// Runs in its own tokio task: crossterm polling happens on the blocking
/// pool, ticks come from a tokio interval, and a oneshot shutdown signal
/// terminates the loop. All events are forwarded to the application over an
/// MPSC channel.
#[derive(Debug)]
pub struct EventHandler {
    event_tx: mpsc::Sender<TuiEvent>,
    shutdown_rx: oneshot::Receiver<()>,
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new handler with the given tick rate.
    pub fn new(
        event_tx: mpsc::Sender<TuiEvent>,
        shutdown_rx: oneshot::Receiver<()>,
        tick_rate: Duration,
    ) -> Self {
        Self {
            event_tx,
            shutdown_rx,
            tick_rate,
        }
    }

    /// Runs the event loop until shutdown is signalled or the receiver side
    /// of the event channel goes away.
    ///
    /// Terminal input is read on a dedicated blocking thread so no polled
    /// event can be lost to a cancelled future; ticks come from a tokio
    /// interval on the async side.
    pub async fn run(mut self) {
        let input_tx = self.event_tx.clone();
        let input = tokio::task::spawn_blocking(move || input_loop(&input_tx));

        let mut tick = tokio::time::interval(self.tick_rate);
        loop {
            tokio::select! {
                _ = &mut self.shutdown_rx => {
                    debug!("event handler shutting down");
                    break;
                }
                _ = tick.tick() => {
                    if self.event_tx.send(TuiEvent::Tick).await.is_err() {
                        break;
                    }
                }
            }
        }

        // The input thread exits once the channel's receiver is dropped.
        drop(self.event_tx);
        let _ = input.await;
    }
}

/// Blocking input loop: polls crossterm and forwards key and resize events.
///
/// Exits when the event channel closes or the terminal becomes unreadable.
fn input_loop(tx: &mpsc::Sender<TuiEvent>) {
    loop {
        match event::poll(Duration::from_millis(POLL_TIMEOUT_MS)) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => tx.blocking_send(TuiEvent::Key(key)),
                    Ok(CrosstermEvent::Resize(w, h)) => {
                        tx.blocking_send(TuiEvent::Resize(w, h))
                    }
                    Ok(_) => Ok(()),
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal event");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }
            }
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "terminal poll failed");
                break;
            }
        }
    }
}

/// The running application: state plus the draw/update loop.
pub struct App {
    state: AppState,
    tick_rate: Duration,
}

impl App {
    /// Creates the application for a seeded board.
    #[must_use]
    pub fn new(board: Board, tick_ms: u64) -> Self {
        Self {
            state: AppState::new(board),
            tick_rate: Duration::from_millis(tick_ms),
        }
    }

    /// Returns the application state, for inspection in tests.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the TUI until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails, the event channel closes
    /// unexpectedly, or a board invariant turns out to be broken.
    pub async fn run(mut self, tui: &mut Tui) -> Result<()> {
        let (event_tx, mut event_rx) = mpsc::channel(64);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let handler = EventHandler::new(event_tx, shutdown_rx, self.tick_rate);
        let handler_task = tokio::spawn(handler.run());

        loop {
            tui.draw(|frame| ui::render(frame, &self.state))
                .map_err(TuiError::Render)?;

            let Some(event) = event_rx.recv().await else {
                return Err(TuiError::ChannelClosed.into());
            };

            match event {
                // Some platforms deliver release events too; only presses act.
                TuiEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.state.handle_key(key)?;
                }
                TuiEvent::Key(_) | TuiEvent::Tick | TuiEvent::Resize(_, _) => {}
            }

            if self.state.should_quit() {
                break;
            }
        }

        let _ = shutdown_tx.send(());
        // The input thread watches for the receiver going away; drop it
        // before joining the handler so the join cannot deadlock.
        drop(event_rx);
        let _ = handler_task.await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Chore;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_state() -> AppState {
        let mut done = Chore::new("task-3", "Trash", "Bins out back");
        done.category = Category::Finished;
        AppState::new(Board::from_chores(vec![
            Chore::new("task-1", "Plants", "Small can"),
            Chore::new("task-2", "Dishes", "By hand"),
            done,
        ]))
    }

    #[test]
    fn starts_focused_on_active_pane() {
        let state = sample_state();
        assert_eq!(state.focus, Category::Active);
        assert_eq!(state.selected(Category::Active), Some(0));
        assert!(!state.should_quit());
    }

    #[test]
    fn q_quits() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(state.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut state = sample_state();
        state
            .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(state.should_quit());
    }

    #[test]
    fn tab_toggles_focus() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus, Category::Finished);
        state.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus, Category::Active);
    }

    #[test]
    fn selection_moves_and_clamps() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('j'))).unwrap();
        assert_eq!(state.selected(Category::Active), Some(1));
        state.handle_key(key(KeyCode::Char('j'))).unwrap();
        assert_eq!(state.selected(Category::Active), Some(1), "clamped at end");
        state.handle_key(key(KeyCode::Char('k'))).unwrap();
        state.handle_key(key(KeyCode::Char('k'))).unwrap();
        assert_eq!(state.selected(Category::Active), Some(0), "clamped at start");
    }

    #[test]
    fn switch_control_moves_selected_chore() {
        // Scenario: task-1 is active; activating its switch control moves it
        // to finished where its control reads Activate.
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(!state.board.list(Category::Active).contains("task-1"));
        let moved = state.board.list(Category::Finished).get("task-1").unwrap();
        assert_eq!(moved.switch_label(), "Activate");
    }

    #[test]
    fn switch_selects_landed_row_as_scroll_cue() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Enter)).unwrap();
        // task-1 landed at the end of the finished list.
        assert_eq!(state.selected(Category::Finished), Some(1));
    }

    #[test]
    fn switch_on_empty_pane_is_a_noop() {
        let mut state = AppState::new(Board::new());
        state.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(state.board.is_empty());
    }

    #[test]
    fn grab_carries_id_and_marks_origin() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('g'))).unwrap();

        assert_eq!(
            state.drag,
            Some(DragState {
                id: "task-1".to_string(),
                origin: Category::Active,
            })
        );
        assert_eq!(state.drop_hint, Some(Category::Active));
    }

    #[test]
    fn focus_change_while_grabbing_moves_receptive_marker() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('g'))).unwrap();
        state.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(state.drop_hint, Some(Category::Finished));
        state.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(state.drop_hint, Some(Category::Active));
    }

    #[test]
    fn drop_on_other_pane_moves_chore_and_clears_marker() {
        // Scenario: grab task-3 (finished) and drop it on the active pane.
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Tab)).unwrap();
        state.handle_key(key(KeyCode::Char('g'))).unwrap();
        state.handle_key(key(KeyCode::Tab)).unwrap();
        state.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(state.board.list(Category::Active).contains("task-3"));
        assert!(!state.board.list(Category::Finished).contains("task-3"));
        assert_eq!(state.drop_hint, None, "receptive marker cleared");
        assert_eq!(state.drag, None);
    }

    #[test]
    fn drop_on_own_pane_changes_nothing() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('g'))).unwrap();
        state.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(state.board.list(Category::Active).len(), 2);
        assert_eq!(state.board.list(Category::Finished).len(), 1);
        assert_eq!(state.drag, None, "drag still ends");
        assert_eq!(state.drop_hint, None);
    }

    #[test]
    fn esc_abandons_drag_without_state_change() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('g'))).unwrap();
        state.handle_key(key(KeyCode::Tab)).unwrap();
        state.handle_key(key(KeyCode::Esc)).unwrap();

        assert_eq!(state.drag, None);
        assert_eq!(state.drop_hint, None);
        assert_eq!(state.board.list(Category::Active).len(), 2);
        assert_eq!(state.board.list(Category::Finished).len(), 1);
    }

    #[test]
    fn info_request_opens_one_tooltip() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('i'))).unwrap();

        let tooltip = state.tooltip.clone().unwrap();
        assert_eq!(tooltip.chore_id, "task-1");
        assert_eq!(tooltip.text, "Small can");
    }

    #[test]
    fn repeated_info_request_is_a_noop() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('i'))).unwrap();
        let first = state.tooltip.clone();
        state.handle_key(key(KeyCode::Char('i'))).unwrap();
        assert_eq!(state.tooltip, first, "still exactly one tooltip");
    }

    #[test]
    fn tooltip_close_allows_a_new_request() {
        // Scenario: info on task-3, close the tooltip, request again.
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Tab)).unwrap();
        state.handle_key(key(KeyCode::Char('i'))).unwrap();
        assert!(state.tooltip.is_some());

        state.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(state.tooltip, None, "closed, active flag cleared");
        assert_eq!(
            state.board.list(Category::Finished).len(),
            1,
            "closing the tooltip must not trigger the switch control"
        );

        state.handle_key(key(KeyCode::Char('i'))).unwrap();
        assert!(state.tooltip.is_some(), "a fresh tooltip opens");
    }

    #[test]
    fn info_on_other_chore_supersedes_open_tooltip() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('i'))).unwrap();
        state.handle_key(key(KeyCode::Char('j'))).unwrap();
        state.handle_key(key(KeyCode::Char('i'))).unwrap();

        let tooltip = state.tooltip.clone().unwrap();
        assert_eq!(tooltip.chore_id, "task-2");
    }

    #[test]
    fn navigation_key_closes_tooltip_first() {
        let mut state = sample_state();
        state.handle_key(key(KeyCode::Char('i'))).unwrap();
        state.handle_key(key(KeyCode::Char('j'))).unwrap();

        assert_eq!(state.tooltip, None);
        assert_eq!(state.selected(Category::Active), Some(1));
    }

    #[test]
    fn empty_pane_info_request_is_ignored() {
        let mut state = AppState::new(Board::new());
        state.handle_key(key(KeyCode::Char('i'))).unwrap();
        assert_eq!(state.tooltip, None);
    }

    #[test]
    fn union_invariant_survives_mixed_gestures() {
        let mut state = sample_state();
        let gestures = [
            KeyCode::Enter,
            KeyCode::Tab,
            KeyCode::Char('g'),
            KeyCode::Tab,
            KeyCode::Enter,
            KeyCode::Char('j'),
            KeyCode::Enter,
            KeyCode::Tab,
            KeyCode::Char('k'),
            KeyCode::Enter,
        ];
        for code in gestures {
            state.handle_key(key(code)).unwrap();
        }

        assert_eq!(state.board.len(), 3);
        for id in ["task-1", "task-2", "task-3"] {
            let in_active = state.board.list(Category::Active).contains(id);
            let in_finished = state.board.list(Category::Finished).contains(id);
            assert!(in_active ^ in_finished, "{id} must be in exactly one list");
        }
    }

    #[test]
    fn symbols_detect_returns_a_set() {
        let symbols = Symbols::detect();
        assert!(!symbols.bullet.is_empty());
        assert!(!symbols.drop_marker.is_empty());
    }
}
