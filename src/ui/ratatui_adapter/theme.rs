//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used by the form and the picker dialog.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Color for the committed-value check mark
    pub selected_mark: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for tag summaries
    pub tag: Color,
    /// Color for the preview affordance
    pub preview: Color,
    /// Color for the placeholder text on the trigger
    pub placeholder: Color,
    /// Color for the "no results" message
    pub no_results: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            selected_mark: Color::Green,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
            preview: Color::Cyan,
            placeholder: Color::Gray,
            no_results: Color::Yellow,
        }
    }

    /// Style for the highlighted row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for ordinary rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the committed-value check mark (✓)
    #[must_use]
    pub fn selected_mark_style(&self) -> Style {
        Style::default()
            .fg(self.selected_mark)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for focused borders
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for tag summaries
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for the preview affordance
    #[must_use]
    pub fn preview_style(&self) -> Style {
        Style::default().fg(self.preview)
    }

    /// Style for trigger placeholder text
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.placeholder)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for the "no results" message
    #[must_use]
    pub fn no_results_style(&self) -> Style {
        Style::default()
            .fg(self.no_results)
            .add_modifier(Modifier::ITALIC)
    }
}
