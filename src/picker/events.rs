//! Picker events
//!
//! Frontend-neutral input vocabulary. Terminal adapters translate key and
//! mouse events into these and feed them to [`Picker::handle`].

use super::state::Picker;
use crate::catalog::Item;

/// Input understood by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// Trigger control activated
    ActivateTrigger,
    /// Host dismissal (Esc, backdrop click)
    Dismiss,
    /// Character typed into the query
    Input(char),
    /// Delete character before the cursor
    Backspace,
    /// Delete character under the cursor
    Delete,
    /// Move query cursor left
    CursorLeft,
    /// Move query cursor right
    CursorRight,
    /// Clear the whole query
    ClearQuery,
    /// Delete the word before the cursor
    DeleteWord,
    /// Move highlight up
    Up,
    /// Move highlight down
    Down,
    /// Move highlight one page up
    PageUp,
    /// Move highlight one page down
    PageDown,
    /// Highlight first item
    Home,
    /// Highlight last item
    End,
    /// Commit the highlighted item
    Commit,
    /// Commit the item at a visible position (mouse click)
    Click(usize),
}

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// State changed, redraw
    Continue,
    /// Query changed, visible subset must be recomputed
    QueryChanged,
    /// Picker became visible
    Opened,
    /// Picker was hidden without a selection
    Closed,
    /// An item was committed
    Committed(String),
    /// Nothing to do
    Ignored,
}

impl Picker {
    /// Apply one event against the current host catalog
    ///
    /// While closed, only `ActivateTrigger` has an effect.
    pub fn handle(&mut self, event: PickerEvent, items: &[Item]) -> EventOutcome {
        if !self.is_open() && event != PickerEvent::ActivateTrigger {
            return EventOutcome::Ignored;
        }

        match event {
            PickerEvent::ActivateTrigger => {
                let was_open = self.is_open();
                self.activate_trigger();
                match (was_open, self.is_open()) {
                    (false, true) => EventOutcome::Opened,
                    (true, false) => EventOutcome::Closed,
                    _ => EventOutcome::Continue,
                }
            }
            PickerEvent::Dismiss => {
                self.dismiss();
                if self.is_open() {
                    EventOutcome::Continue
                } else {
                    EventOutcome::Closed
                }
            }
            PickerEvent::Input(c) => {
                self.query_push(c);
                EventOutcome::QueryChanged
            }
            PickerEvent::Backspace => changed(self.query_backspace()),
            PickerEvent::Delete => changed(self.query_delete()),
            PickerEvent::DeleteWord => changed(self.query_delete_word()),
            PickerEvent::ClearQuery => {
                if self.query().is_empty() {
                    EventOutcome::Ignored
                } else {
                    self.query_clear();
                    EventOutcome::QueryChanged
                }
            }
            PickerEvent::CursorLeft => {
                self.query_cursor_left();
                EventOutcome::Continue
            }
            PickerEvent::CursorRight => {
                self.query_cursor_right();
                EventOutcome::Continue
            }
            PickerEvent::Up => {
                self.highlight_up(items);
                EventOutcome::Continue
            }
            PickerEvent::Down => {
                self.highlight_down(items);
                EventOutcome::Continue
            }
            PickerEvent::PageUp => {
                self.page_up(items);
                EventOutcome::Continue
            }
            PickerEvent::PageDown => {
                self.page_down(items);
                EventOutcome::Continue
            }
            PickerEvent::Home => {
                self.jump_to_start();
                EventOutcome::Continue
            }
            PickerEvent::End => {
                self.jump_to_end(items);
                EventOutcome::Continue
            }
            PickerEvent::Commit => self
                .commit_highlighted(items)
                .map_or(EventOutcome::Ignored, EventOutcome::Committed),
            PickerEvent::Click(position) => self
                .select_visible(items, position)
                .map_or(EventOutcome::Ignored, EventOutcome::Committed),
        }
    }
}

const fn changed(did_change: bool) -> EventOutcome {
    if did_change {
        EventOutcome::QueryChanged
    } else {
        EventOutcome::Ignored
    }
}
