//! Trigger widget: the form field that shows the current voice

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Activation control showing the selected voice or the placeholder
pub struct Trigger<'a> {
    label: &'a str,
    is_placeholder: bool,
    open: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Trigger<'a> {
    /// Create a trigger for `label`
    ///
    /// `is_placeholder` selects the placeholder styling; the label itself is
    /// already resolved by the picker.
    #[must_use]
    pub const fn new(label: &'a str, is_placeholder: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            is_placeholder,
            open: false,
            focused: true,
            theme,
        }
    }

    /// Show the open chevron
    #[must_use]
    pub const fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Trigger<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Voice ");

        let inner = block.inner(area);
        block.render(area, buf);

        let label_style = if self.is_placeholder {
            self.theme.placeholder_style()
        } else {
            self.theme.normal_style()
        };
        let chevron = if self.open { "▴" } else { "▾" };

        let line = Line::from(vec![
            Span::styled(self.label, label_style),
            Span::raw(" "),
            Span::styled(chevron, self.theme.dimmed_style()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
