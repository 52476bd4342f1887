//! Render snapshot
//!
//! A `PickerView` is rebuilt from the picker, the host catalog and the
//! host value on every frame; nothing in it outlives that frame.

use super::filter::Filtered;
use crate::catalog::Item;

/// Message shown when the visible subset is empty
pub const NO_RESULTS_MESSAGE: &str = "No voices found.";

/// Everything a frontend needs to draw the picker for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView<'a> {
    /// Text on the trigger control
    pub trigger_label: &'a str,
    /// Whether the dialog is visible
    pub open: bool,
    /// Current query
    pub query: &'a str,
    /// Byte offset of the query cursor
    pub query_cursor: usize,
    /// Visible subset; `None` while closed
    pub results: Option<Filtered<'a>>,
    /// Highlighted position inside `results`
    pub highlight: usize,
    /// First row of the list viewport
    pub scroll_offset: usize,
}

impl<'a> PickerView<'a> {
    /// Whether the dialog is open and showing the "no results" state
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        matches!(self.results, Some(Filtered::NoResults))
    }

    /// Highlighted item, if any
    #[must_use]
    pub fn highlighted(&self) -> Option<&'a Item> {
        self.results.as_ref()?.get(self.highlight)
    }
}
