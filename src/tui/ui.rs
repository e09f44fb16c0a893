//! Frame rendering and layout composition for the chores TUI.
//!
//! The view layer composes the header, the two chore panes, the footer, and
//! finally the tooltip overlay (painted last so it sits above the panes).
//! All rendering is a pure function of [`AppState`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::AppState;
use crate::tui::widgets::{
    tooltip_area, wrapped_lines, ChoreListWidget, FooterWidget, TooltipWidget, FOOTER_HEIGHT,
};
use crate::types::Category;

/// Renders a full frame for the current application state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    let header = Paragraph::new("Chores Board")
        .style(state.theme.title)
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_pane(frame, state, Category::Active, panes[0]);
    render_pane(frame, state, Category::Finished, panes[1]);

    let footer = FooterWidget::new(
        &state.theme,
        &state.symbols,
        state.board.list(Category::Active).len(),
        state.board.list(Category::Finished).len(),
        state.drag.is_some(),
    );
    frame.render_widget(footer, chunks[2]);

    render_tooltip(frame, state, [panes[0], panes[1]]);
}

/// Renders one chore pane into its area.
fn render_pane(frame: &mut Frame, state: &AppState, category: Category, area: Rect) {
    let widget = ChoreListWidget::new(
        state.board.list(category),
        &state.theme,
        &state.symbols,
        state.selected(category),
        state.focus == category,
        state.drop_hint == Some(category),
        state.drag.as_ref().map(|d| d.id.as_str()),
    );
    frame.render_widget(widget, area);
}

/// Renders the tooltip overlay anchored to its chore's visible row.
fn render_tooltip(frame: &mut Frame, state: &AppState, pane_areas: [Rect; 2]) {
    let Some(tooltip) = &state.tooltip else {
        return;
    };
    let Some(anchor) = anchor_row(state, tooltip.chore_id.as_str(), pane_areas) else {
        return;
    };

    let lines = wrapped_lines(&tooltip.text, frame.area().width);
    let area = tooltip_area(anchor, frame.area(), lines);
    frame.render_widget(TooltipWidget::new(&tooltip.text, &state.theme), area);
}

/// Computes the on-screen row rect of the chore a tooltip is bound to.
///
/// The pane's scroll offset is folded in here, so the returned rect is the
/// row's visible bounds. Returns `None` if the chore is scrolled out of
/// view or (invariant violation) not on the board.
fn anchor_row(state: &AppState, id: &str, pane_areas: [Rect; 2]) -> Option<Rect> {
    let category = state.board.locate(id)?;
    let list = state.board.list(category);
    let index = list.chores().iter().position(|c| c.id == id)?;

    let area = pane_areas[crate::tui::app::pane_index(category)];
    // Mirror the pane widget's inner area (one-cell border all around).
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let visible_rows = inner.height as usize;
    let offset = ChoreListWidget::scroll_offset(state.selected(category), visible_rows);
    if index < offset || index >= offset + visible_rows {
        return None;
    }

    Some(Rect {
        x: inner.x,
        y: inner.y + (index - offset) as u16,
        width: inner.width,
        height: 1,
    })
}
