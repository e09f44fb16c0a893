//! Terminal user interface for the chores board.
//!
//! Built with [`ratatui`] in a Model-View-Controller split:
//!
//! - [`app`]: application state, key dispatch, and the event loop
//! - [`ui`]: layout and rendering
//! - [`terminal`]: raw-mode setup and RAII restoration with panic handling
//! - [`widgets`]: the pane, tooltip, and footer components

pub mod app;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use app::{App, AppState, TuiEvent};
pub use terminal::{install_panic_hook, Tui};
