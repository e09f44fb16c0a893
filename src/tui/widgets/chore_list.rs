//! Pane widget rendering one chore list.
//!
//! Each pane is a bordered block titled with its category and count. Rows
//! show a bullet, the chore title, and the switch-control hint
//! (`[Finish]` or `[Activate]`). The selected row is highlighted, a grabbed
//! chore is restyled with the drag handle, and a pane that is the live drop
//! target gets the receptive border.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::board::ChoreList;
use crate::tui::app::{Symbols, Theme};

/// Widget for rendering one chore pane.
///
/// Stateless: borrows the list, styling, and view flags from the caller.
#[derive(Debug)]
pub struct ChoreListWidget<'a> {
    list: &'a ChoreList,
    theme: &'a Theme,
    symbols: &'a Symbols,
    /// Selected row, if the pane is non-empty.
    selected: Option<usize>,
    /// Whether this pane holds keyboard focus.
    focused: bool,
    /// Whether this pane is marked as a receptive drop target.
    droppable: bool,
    /// Id of the grabbed chore, if a drag is in flight.
    grabbed_id: Option<&'a str>,
}

impl<'a> ChoreListWidget<'a> {
    /// Creates the widget for one pane.
    #[must_use]
    pub fn new(
        list: &'a ChoreList,
        theme: &'a Theme,
        symbols: &'a Symbols,
        selected: Option<usize>,
        focused: bool,
        droppable: bool,
        grabbed_id: Option<&'a str>,
    ) -> Self {
        Self {
            list,
            theme,
            symbols,
            selected,
            focused,
            droppable,
            grabbed_id,
        }
    }

    /// Returns the first visible row so the selection stays in view.
    ///
    /// This is the scroll-into-view behavior: when the selection runs past
    /// the visible window the window slides down to include it.
    #[must_use]
    pub fn scroll_offset(selected: Option<usize>, visible_rows: usize) -> usize {
        match (selected, visible_rows) {
            (Some(index), rows) if rows > 0 && index >= rows => index + 1 - rows,
            _ => 0,
        }
    }

    fn border_style(&self) -> ratatui::style::Style {
        if self.droppable {
            self.theme.border_droppable
        } else if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        }
    }
}

impl Widget for ChoreListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = format!(
            " {} ({}) ",
            self.list.category().title(),
            self.list.len()
        );
        if self.droppable {
            title.push_str(self.symbols.drop_marker);
            title.push(' ');
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(title, self.theme.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.list.is_empty() {
            Paragraph::new(Line::styled("(empty)", self.theme.text_muted)).render(inner, buf);
            return;
        }

        let visible_rows = inner.height as usize;
        let offset = Self::scroll_offset(self.selected, visible_rows);

        for (row, (index, chore)) in self
            .list
            .chores()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .enumerate()
        {
            let grabbed = self.grabbed_id == Some(chore.id.as_str());
            let selected = self.selected == Some(index);

            let marker = if grabbed {
                self.symbols.handle
            } else {
                match self.list.category() {
                    crate::types::Category::Active => self.symbols.bullet,
                    crate::types::Category::Finished => self.symbols.done,
                }
            };
            let title_style = if grabbed {
                self.theme.grabbed
            } else if selected && self.focused {
                self.theme.selection
            } else {
                self.theme.text_primary
            };

            let line = Line::from(vec![
                Span::styled(format!("{marker} "), self.theme.text_muted),
                Span::styled(chore.title.clone(), title_style),
                Span::raw(" "),
                Span::styled(format!("[{}]", chore.switch_label()), self.theme.switch_hint),
            ]);

            let row_area = Rect {
                x: inner.x,
                y: inner.y + row as u16,
                width: inner.width,
                height: 1,
            };
            Paragraph::new(line).render(row_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::types::{Category, Chore};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn sample_list() -> ChoreList {
        let mut list = ChoreList::new(Category::Active);
        list.add_chore(Chore::new("task-1", "Plants", ""));
        list.add_chore(Chore::new("task-2", "Dishes", ""));
        list
    }

    fn render(widget: ChoreListWidget) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| f.render_widget(widget, f.area()))
            .unwrap();
        terminal
    }

    #[test]
    fn renders_title_with_count() {
        let list = sample_list();
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;
        let terminal = render(ChoreListWidget::new(
            &list, &theme, &symbols, Some(0), true, false, None,
        ));
        assert!(buffer_text(&terminal).contains("Active (2)"));
    }

    #[test]
    fn rows_show_switch_label_hint() {
        let list = sample_list();
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;
        let terminal = render(ChoreListWidget::new(
            &list, &theme, &symbols, Some(0), true, false, None,
        ));
        let text = buffer_text(&terminal);
        assert!(text.contains("Plants"));
        assert!(text.contains("[Finish]"));
    }

    #[test]
    fn finished_list_rows_offer_activate() {
        let mut list = ChoreList::new(Category::Finished);
        list.add_chore(Chore::new("task-3", "Trash", ""));
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;
        let terminal = render(ChoreListWidget::new(
            &list, &theme, &symbols, Some(0), false, false, None,
        ));
        let text = buffer_text(&terminal);
        assert!(text.contains("Finished (1)"));
        assert!(text.contains("[Activate]"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let list = ChoreList::new(Category::Active);
        let theme = Theme::default();
        let symbols = crate::tui::app::ASCII_SYMBOLS;
        let terminal = render(ChoreListWidget::new(
            &list, &theme, &symbols, None, false, false, None,
        ));
        assert!(buffer_text(&terminal).contains("(empty)"));
    }

    #[test]
    fn droppable_pane_is_marked() {
        let list = sample_list();
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;
        let terminal = render(ChoreListWidget::new(
            &list, &theme, &symbols, Some(0), true, true, None,
        ));
        assert!(buffer_text(&terminal).contains('⇣'));
    }

    #[test]
    fn grabbed_chore_gets_the_handle_marker() {
        let list = sample_list();
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;
        let terminal = render(ChoreListWidget::new(
            &list,
            &theme,
            &symbols,
            Some(0),
            true,
            false,
            Some("task-1"),
        ));
        assert!(buffer_text(&terminal).contains(symbols.handle));
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        assert_eq!(ChoreListWidget::scroll_offset(None, 5), 0);
        assert_eq!(ChoreListWidget::scroll_offset(Some(2), 5), 0);
        assert_eq!(ChoreListWidget::scroll_offset(Some(5), 5), 1);
        assert_eq!(ChoreListWidget::scroll_offset(Some(9), 3), 7);
        assert_eq!(ChoreListWidget::scroll_offset(Some(9), 0), 0);
    }

    #[test]
    fn long_list_scrolls_selected_row_into_view() {
        let mut list = ChoreList::new(Category::Active);
        for n in 0..20 {
            list.add_chore(Chore::new(format!("task-{n}"), format!("Chore {n}"), ""));
        }
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;
        let terminal = render(ChoreListWidget::new(
            &list,
            &theme,
            &symbols,
            Some(19),
            true,
            false,
            None,
        ));
        let text = buffer_text(&terminal);
        assert!(text.contains("Chore 19"));
        assert!(!text.contains("Chore 0 "));
    }
}
