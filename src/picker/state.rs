//! Picker state
//!
//! Holds only what the picker owns: open state (when uncontrolled), the
//! query, and the keyboard highlight. The catalog and the current value
//! belong to the host and are passed in on every call.

use super::error::Result;
use super::filter::{Filtered, MatchMode, filter};
use super::open_state::{OpenChange, OpenState};
use super::view::PickerView;
use crate::catalog::{self, Item};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trigger text shown when nothing valid is selected
pub const DEFAULT_PLACEHOLDER: &str = "Select a voice...";

/// List rows assumed until the host reports its viewport
const DEFAULT_VISIBLE_HEIGHT: usize = 10;

/// Host callback receiving the committed item id
pub type ValueChange = Box<dyn FnMut(&str)>;

/// What happens to the query when the picker reopens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryRetention {
    /// The query survives close and reopen
    #[default]
    Keep,
    /// The query is cleared on every closed-to-open transition
    ClearOnOpen,
}

/// Builder for [`Picker`]
#[derive(Default)]
pub struct PickerBuilder {
    open: Option<bool>,
    on_open_change: Option<OpenChange>,
    on_value_change: Option<ValueChange>,
    placeholder: Option<String>,
    match_mode: MatchMode,
    retention: QueryRetention,
}

impl PickerBuilder {
    /// Supply the host-owned open flag (selects controlled mode)
    #[must_use]
    pub const fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Supply the host setter for the open flag
    #[must_use]
    pub fn on_open_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(f));
        self
    }

    /// Supply the commit callback
    #[must_use]
    pub fn on_value_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_value_change = Some(Box::new(f));
        self
    }

    /// Override the placeholder
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the match mode
    #[must_use]
    pub const fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Set the query retention policy
    #[must_use]
    pub const fn query_retention(mut self, retention: QueryRetention) -> Self {
        self.retention = retention;
        self
    }

    /// Build the picker
    ///
    /// # Errors
    ///
    /// Returns `PickerError::PartialControl` if only one of `open` and
    /// `on_open_change` was supplied.
    pub fn build(mut self) -> Result<Picker> {
        let open = OpenState::from_parts(self.open.take(), self.on_open_change.take())?;
        Ok(self.assemble(open))
    }

    /// Picker with the given open state and every other setting from `self`
    fn assemble(self, open: OpenState) -> Picker {
        Picker {
            open,
            query: String::new(),
            query_cursor: 0,
            highlight: 0,
            scroll_offset: 0,
            visible_height: DEFAULT_VISIBLE_HEIGHT,
            placeholder: self
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            match_mode: self.match_mode,
            retention: self.retention,
            on_value_change: self.on_value_change,
        }
    }
}

/// Searchable single-select picker
pub struct Picker {
    open: OpenState,
    query: String,
    query_cursor: usize,
    highlight: usize,
    scroll_offset: usize,
    visible_height: usize,
    placeholder: String,
    match_mode: MatchMode,
    retention: QueryRetention,
    on_value_change: Option<ValueChange>,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    /// Uncontrolled picker with default settings and no callback
    #[must_use]
    pub fn new() -> Self {
        Self::builder().assemble(OpenState::Uncontrolled { open: false })
    }

    /// Start building a picker
    #[must_use]
    pub fn builder() -> PickerBuilder {
        PickerBuilder::default()
    }

    /// Whether the picker is currently open
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Whether the host owns the open flag
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.open.is_controlled()
    }

    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Byte offset of the query cursor
    #[must_use]
    pub const fn query_cursor(&self) -> usize {
        self.query_cursor
    }

    /// Placeholder shown by the trigger
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Active match mode
    #[must_use]
    pub const fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Active query retention policy
    #[must_use]
    pub const fn retention(&self) -> QueryRetention {
        self.retention
    }

    /// First visible row of the list viewport, kept so that the clamped
    /// highlight is on screen for the current catalog
    #[must_use]
    pub fn scroll_offset(&self, items: &[Item]) -> usize {
        viewport_start(self.highlight(items), self.scroll_offset, self.visible_height)
    }

    /// Set the number of list rows the host can show (used for paging)
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
        self.adjust_scroll();
    }

    /// Highlighted position, clamped to the current visible subset
    #[must_use]
    pub fn highlight(&self, items: &[Item]) -> usize {
        self.highlight
            .min(self.visible(items).len().saturating_sub(1))
    }

    /// Selected item, looked up fresh from `items`
    #[must_use]
    pub fn selected<'a>(items: &'a [Item], value: Option<&str>) -> Option<&'a Item> {
        value.and_then(|id| catalog::find(items, id))
    }

    /// Trigger text: the selected item's name, or the placeholder when
    /// `value` is absent or unknown
    #[must_use]
    pub fn trigger_label<'a>(&'a self, items: &'a [Item], value: Option<&str>) -> &'a str {
        Self::selected(items, value).map_or(self.placeholder.as_str(), |item| {
            item.display_name.as_str()
        })
    }

    /// Visible subset for the current query
    #[must_use]
    pub fn visible<'a>(&self, items: &'a [Item]) -> Filtered<'a> {
        filter(items, &self.query, self.match_mode)
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn view<'a>(&'a self, items: &'a [Item], value: Option<&str>) -> PickerView<'a> {
        let results = self.is_open().then(|| self.visible(items));
        let highlight = results
            .as_ref()
            .map_or(0, |r| self.highlight.min(r.len().saturating_sub(1)));
        let scroll_offset = viewport_start(highlight, self.scroll_offset, self.visible_height);
        PickerView {
            trigger_label: self.trigger_label(items, value),
            open: self.is_open(),
            query: &self.query,
            query_cursor: self.query_cursor,
            results,
            highlight,
            scroll_offset,
        }
    }

    // ------------------------------------------------------------------
    // Open/close transitions
    // ------------------------------------------------------------------

    /// Trigger activation: toggle through the active ownership mode
    pub fn activate_trigger(&mut self) {
        let target = !self.is_open();
        log::debug!("Trigger activated, requesting open={target}");
        self.transition(|open| open.request(target));
    }

    /// Host dismissal (Esc, backdrop)
    pub fn dismiss(&mut self) {
        if self.is_open() {
            log::debug!("Picker dismissed");
            self.transition(|open| open.request(false));
        }
    }

    /// Push a new host-owned open value into a controlled picker
    ///
    /// # Errors
    ///
    /// Returns `PickerError::NotControlled` for an uncontrolled picker.
    pub fn sync_open(&mut self, open: bool) -> Result<()> {
        let mut outcome = Ok(());
        self.transition(|state| outcome = state.sync(open));
        outcome
    }

    /// Run a state change and apply the reopen policy if it opened the picker
    fn transition(&mut self, change: impl FnOnce(&mut OpenState)) {
        let was_open = self.is_open();
        change(&mut self.open);
        if !was_open && self.is_open() {
            self.on_opened();
        }
    }

    fn on_opened(&mut self) {
        if self.retention == QueryRetention::ClearOnOpen {
            self.query_clear();
        }
        self.highlight = 0;
        self.scroll_offset = 0;
    }

    // ------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------

    /// Commit `item`: notify the host, then close
    ///
    /// The query is left untouched.
    pub fn commit(&mut self, item: &Item) {
        log::info!("Committing selection '{}' ({})", item.display_name, item.id);
        if let Some(on_value_change) = self.on_value_change.as_mut() {
            on_value_change(&item.id);
        }
        self.transition(|open| open.request(false));
    }

    /// Commit the item at a visible position
    ///
    /// Returns the committed id, or `None` if the picker is closed or the
    /// position is outside the visible subset.
    pub fn select_visible(&mut self, items: &[Item], position: usize) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        let item = self.visible(items).get(position)?;
        self.commit(item);
        Some(item.id.clone())
    }

    /// Commit the highlighted item
    pub fn commit_highlighted(&mut self, items: &[Item]) -> Option<String> {
        let position = self.highlight(items);
        self.select_visible(items, position)
    }

    // ------------------------------------------------------------------
    // Highlight navigation
    // ------------------------------------------------------------------

    /// Move highlight up
    pub fn highlight_up(&mut self, items: &[Item]) {
        self.highlight = self.highlight(items).saturating_sub(1);
        self.adjust_scroll();
    }

    /// Move highlight down
    pub fn highlight_down(&mut self, items: &[Item]) {
        let len = self.visible(items).len();
        let current = self.highlight(items);
        if current + 1 < len {
            self.highlight = current + 1;
        } else {
            self.highlight = current;
        }
        self.adjust_scroll();
    }

    /// Move highlight up by one page
    pub fn page_up(&mut self, items: &[Item]) {
        self.highlight = self.highlight(items).saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move highlight down by one page
    pub fn page_down(&mut self, items: &[Item]) {
        let max = self.visible(items).len().saturating_sub(1);
        self.highlight = (self.highlight(items) + self.visible_height).min(max);
        self.adjust_scroll();
    }

    /// Jump to first visible item
    pub fn jump_to_start(&mut self) {
        self.highlight = 0;
        self.adjust_scroll();
    }

    /// Jump to last visible item
    pub fn jump_to_end(&mut self, items: &[Item]) {
        self.highlight = self.visible(items).len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the highlight inside the viewport
    fn adjust_scroll(&mut self) {
        self.scroll_offset = viewport_start(self.highlight, self.scroll_offset, self.visible_height);
    }

    fn reset_highlight(&mut self) {
        self.highlight = 0;
        self.scroll_offset = 0;
    }

    // ------------------------------------------------------------------
    // Query editing
    // ------------------------------------------------------------------

    /// Insert a character at the cursor
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.reset_highlight();
    }

    /// Remove the character before the cursor
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev);
        self.query_cursor = prev;
        self.reset_highlight();
        true
    }

    /// Delete the character under the cursor
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        self.reset_highlight();
        true
    }

    /// Move the cursor one character left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the cursor one character right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.reset_highlight();
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let trimmed = self.query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |i| i + 1);
        self.query.drain(start..self.query_cursor);
        self.query_cursor = start;
        self.reset_highlight();
        true
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("open", &self.open)
            .field("query", &self.query)
            .field("highlight", &self.highlight)
            .field("placeholder", &self.placeholder)
            .field("match_mode", &self.match_mode)
            .field("retention", &self.retention)
            .field("has_value_callback", &self.on_value_change.is_some())
            .finish_non_exhaustive()
    }
}

/// Smallest move of `offset` that puts `highlight` inside a viewport of
/// `height` rows
const fn viewport_start(highlight: usize, offset: usize, height: usize) -> usize {
    if highlight < offset {
        highlight
    } else if highlight >= offset + height {
        highlight + 1 - height
    } else {
        offset
    }
}
