//! Transient tooltip overlay showing a chore's annotation.
//!
//! The tooltip is anchored to the row of the chore that spawned it: placed
//! just below and slightly right of the row's visible bounds. Scrolling is
//! already folded into the anchor rect by the caller, so the placement only
//! needs the frame for clamping. The overlay is cleared before rendering so
//! it paints above whatever is underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::app::Theme;

/// Horizontal offset of the tooltip from its anchor, in columns.
const X_OFFSET: u16 = 2;

/// Preferred tooltip width, in columns (borders included).
const WIDTH: u16 = 34;

/// Computes the overlay area for a tooltip anchored to `anchor`.
///
/// The tooltip opens just below the anchor row, shifted [`X_OFFSET`] columns
/// right, and is clamped so it stays inside `frame`. `text_lines` is the
/// wrapped body height the caller expects.
#[must_use]
pub fn tooltip_area(anchor: Rect, frame: Rect, text_lines: u16) -> Rect {
    let width = WIDTH.min(frame.width);
    let height = (text_lines + 2).min(frame.height);

    let mut x = anchor.x.saturating_add(X_OFFSET);
    let mut y = anchor.y.saturating_add(anchor.height);

    if x + width > frame.right() {
        x = frame.right().saturating_sub(width);
    }
    if y + height > frame.bottom() {
        // No room below the anchor: open above it instead.
        y = anchor.y.saturating_sub(height).max(frame.y);
    }

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Returns the number of wrapped lines `text` needs at the tooltip's inner
/// width.
#[must_use]
pub fn wrapped_lines(text: &str, frame_width: u16) -> u16 {
    let inner = WIDTH.min(frame_width).saturating_sub(2).max(1) as usize;
    let mut lines = 0u16;
    for part in text.split('\n') {
        let chars = part.chars().count().max(1);
        lines = lines.saturating_add(chars.div_ceil(inner) as u16);
    }
    lines.max(1)
}

/// Widget for rendering the tooltip overlay.
#[derive(Debug)]
pub struct TooltipWidget<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> TooltipWidget<'a> {
    /// Creates a tooltip for the given annotation text.
    #[must_use]
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for TooltipWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(self.text)
            .style(self.theme.tooltip)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
