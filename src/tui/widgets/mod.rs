//! Reusable TUI widget components for the chores board.
//!
//! Each widget is a standalone [`ratatui::widgets::Widget`] implementation
//! composed by the view layer; view types share no base type.
//!
//! - [`chore_list`]: one pane of the board (list rows, selection, drop
//!   highlight)
//! - [`tooltip`]: the transient info overlay and its placement policy
//! - [`footer`]: counts and keybinding hints
//!
//! Widgets are stateless; all state lives in
//! [`AppState`](crate::tui::app::AppState) and is borrowed per frame.

pub mod chore_list;
pub mod footer;
pub mod tooltip;

pub use chore_list::ChoreListWidget;
pub use footer::{FooterWidget, FOOTER_HEIGHT};
pub use tooltip::{tooltip_area, wrapped_lines, TooltipWidget};
