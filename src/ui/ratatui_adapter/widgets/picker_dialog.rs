//! Picker dialog: a centered modal with search bar, voice list and a
//! match count footer
//!
//! Layout is exposed separately so the host can map mouse clicks onto the
//! same rectangles the dialog draws into.

use super::search_bar::SearchBar;
use super::voice_list::VoiceList;
use crate::picker::PickerView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const MAX_WIDTH: u16 = 80;
const MAX_HEIGHT: u16 = 22;

/// Screen regions of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogLayout {
    /// Whole dialog, including border
    pub dialog: Rect,
    /// Search bar
    pub search: Rect,
    /// Voice rows
    pub list: Rect,
    /// Match count line
    pub footer: Rect,
}

impl DialogLayout {
    /// Compute the dialog regions inside `area`
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = MAX_HEIGHT.min(area.height.saturating_sub(2));
        let dialog = centered_rect(width, height, area);

        let inner = Block::default().borders(Borders::ALL).inner(dialog);
        let [search, list, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Self {
            dialog,
            search,
            list,
            footer,
        }
    }
}

/// Calculate centered area for the modal
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Modal picker dialog
pub struct PickerDialog<'a> {
    view: &'a PickerView<'a>,
    total: usize,
    value: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> PickerDialog<'a> {
    /// Create a dialog for an open picker view
    ///
    /// `total` is the catalog size, shown next to the match count.
    #[must_use]
    pub const fn new(
        view: &'a PickerView<'a>,
        total: usize,
        value: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            view,
            total,
            value,
            theme,
        }
    }
}

impl Widget for PickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(results) = self.view.results.as_ref() else {
            return;
        };
        let layout = DialogLayout::compute(area);

        Clear.render(layout.dialog, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Select a voice ")
            .title_alignment(Alignment::Center)
            .render(layout.dialog, buf);

        SearchBar::new(self.view.query, self.view.query_cursor, self.theme)
            .render(layout.search, buf);

        VoiceList::new(results, self.theme)
            .highlight(self.view.highlight, self.view.scroll_offset)
            .value(self.value)
            .render(layout.list, buf);

        let footer = format!("{} of {} voices", results.len(), self.total);
        Paragraph::new(Line::styled(footer, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(layout.footer, buf);
    }
}
