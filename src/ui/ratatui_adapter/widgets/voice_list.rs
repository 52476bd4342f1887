//! Voice list widget for displaying the visible subset

use crate::catalog::Item;
use crate::picker::{Filtered, NO_RESULTS_MESSAGE};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

/// Maximum description length shown per row
const DESCRIPTION_CHARS: usize = 40;

/// List of matching voices with highlight and selection indicators
pub struct VoiceList<'a> {
    results: &'a Filtered<'a>,
    highlight: usize,
    scroll_offset: usize,
    value: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> VoiceList<'a> {
    /// Create a new voice list widget
    #[must_use]
    pub const fn new(results: &'a Filtered<'a>, theme: &'a Theme) -> Self {
        Self {
            results,
            highlight: 0,
            scroll_offset: 0,
            value: None,
            theme,
        }
    }

    /// Highlighted position and first visible row
    #[must_use]
    pub const fn highlight(mut self, highlight: usize, scroll_offset: usize) -> Self {
        self.highlight = highlight;
        self.scroll_offset = scroll_offset;
        self
    }

    /// Mark the host's current value
    #[must_use]
    pub const fn value(mut self, value: Option<&'a str>) -> Self {
        self.value = value;
        self
    }

    fn render_item(&self, item: &'a Item, is_cursor: bool) -> ListItem<'a> {
        let is_selected = self.value == Some(item.id.as_str());

        let cursor_char = if is_cursor { ">" } else { " " };
        let select_char = if is_selected { "✓" } else { " " };
        let name_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(select_char, self.theme.selected_mark_style()),
            Span::raw(" "),
            Span::styled(item.display_name.as_str(), name_style),
        ];

        if item.has_preview() {
            spans.push(Span::styled(" ▶", self.theme.preview_style()));
        }

        let tags = item.tag_summary();
        if !tags.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(tags, self.theme.tag_style()));
        }

        if let Some(description) = item.truncated_description(DESCRIPTION_CHARS) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(description, self.theme.dimmed_style()));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Widget for VoiceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let Filtered::Matches(items) = self.results else {
            Paragraph::new(NO_RESULTS_MESSAGE)
                .style(self.theme.no_results_style())
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        };

        let start = self.scroll_offset.min(items.len());
        let end = (start + area.height as usize).min(items.len());

        let rows: Vec<ListItem> = items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, &item)| self.render_item(item, start + offset == self.highlight))
            .collect();

        List::new(rows).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{MatchMode, filter};
    use crate::testing::{buffer_text, sample_voices};

    fn render(results: &Filtered<'_>, value: Option<&str>, highlight: usize) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 4);
        let mut buf = Buffer::empty(area);
        VoiceList::new(results, &theme)
            .highlight(highlight, 0)
            .value(value)
            .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_rows_show_metadata() {
        let items = sample_voices();
        let results = filter(&items, "rachel", MatchMode::Substring);
        let text = render(&results, None, 0);

        assert!(text.contains("> "));
        assert!(text.contains("Rachel ▶"));
        assert!(text.contains("american · female"));
        assert!(text.contains("Calm young adult voice"));
    }

    #[test]
    fn test_marks_current_value() {
        let items = sample_voices();
        let results = filter(&items, "", MatchMode::Substring);
        let text = render(&results, Some("v2"), 0);
        assert!(text.contains("✓ Adam"));
    }

    #[test]
    fn test_no_results_message() {
        let items = sample_voices();
        let results = filter(&items, "zzz", MatchMode::Substring);
        let text = render(&results, None, 0);
        assert!(text.contains("No voices found."));
    }

    #[test]
    fn test_viewport_respects_area_height() {
        let items = sample_voices();
        let results = filter(&items, "", MatchMode::Substring);
        let text = render(&results, None, 0);
        assert!(text.contains("Bella"));
        assert!(!text.contains("Domi"));
    }
}
