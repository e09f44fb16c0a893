//! Footer widget: chore counts plus keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::app::{Symbols, Theme};

/// Height of the footer in rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Widget for the one-line footer.
#[derive(Debug)]
pub struct FooterWidget<'a> {
    theme: &'a Theme,
    symbols: &'a Symbols,
    active: usize,
    finished: usize,
    /// Whether a grab is in flight, which changes the hint text.
    dragging: bool,
}

impl<'a> FooterWidget<'a> {
    /// Creates the footer for the current counts and drag state.
    #[must_use]
    pub fn new(
        theme: &'a Theme,
        symbols: &'a Symbols,
        active: usize,
        finished: usize,
        dragging: bool,
    ) -> Self {
        Self {
            theme,
            symbols,
            active,
            finished,
            dragging,
        }
    }
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sep = self.symbols.separator;
        let hints = if self.dragging {
            format!("Tab target {sep} Enter drop {sep} Esc cancel")
        } else {
            format!(
                "Tab pane {sep} j/k select {sep} Enter switch {sep} g grab {sep} i info {sep} q quit"
            )
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} active {sep} {} finished ", self.active, self.finished),
                self.theme.title,
            ),
            Span::styled(hints, self.theme.text_muted),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
