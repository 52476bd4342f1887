//! Output formatting for CLI display
//!
//! Formatting helpers for voice listings and selection reports.

use crate::catalog::Item;
use colored::Colorize;
use std::fmt::Write;

/// Format a voice for a listing
///
/// Quiet mode prints the bare id so the output can be piped.
#[must_use]
pub fn voice_line(item: &Item, quiet: bool) -> String {
    if quiet {
        return item.id.clone();
    }

    let tags = item.tag_summary();
    let mut line = format!("  {:<8} {}", item.id, item.display_name);
    if !tags.is_empty() {
        let _ = write!(line, " [{tags}]");
    }
    if let Some(description) = item.truncated_description(60) {
        let _ = write!(line, " - {description}");
    }
    line
}

/// Header for a filtered listing
#[must_use]
pub fn match_count(shown: usize, total: usize) -> String {
    format!("{shown} of {total} voices")
}

/// Colored trigger label (dimmed when showing the placeholder)
#[must_use]
pub fn colorize_label(label: &str, is_placeholder: bool) -> String {
    if is_placeholder {
        label.dimmed().to_string()
    } else {
        label.bold().to_string()
    }
}
