//! Event handling for the ratatui TUI
//!
//! Maps crossterm key and mouse events onto form actions and
//! [`PickerEvent`]s. Which table applies depends on whether the picker
//! dialog is open.

use super::widgets::DialogLayout;
use crate::picker::PickerEvent;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// What the form should do with an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Forward to the picker
    Picker(PickerEvent),
    /// Leave the form keeping the current value
    Submit,
    /// Leave the form discarding changes
    Abort,
    /// Ctrl-C
    Interrupt,
    /// Nothing to do
    Ignored,
}

/// Regions the host drew in the last frame
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
    /// Trigger control
    pub trigger: Rect,
    /// Dialog regions (only meaningful while open)
    pub dialog: DialogLayout,
}

/// Map a key event
#[must_use]
pub fn map_key(key: KeyEvent, picker_open: bool) -> FormAction {
    if key.kind != KeyEventKind::Press {
        return FormAction::Ignored;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return FormAction::Interrupt;
    }

    if picker_open {
        map_picker_key(key)
    } else {
        map_form_key(key)
    }
}

fn map_form_key(key: KeyEvent) -> FormAction {
    match (key.code, key.modifiers) {
        (KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down, _) => {
            FormAction::Picker(PickerEvent::ActivateTrigger)
        }
        (KeyCode::Char('s'), KeyModifiers::NONE | KeyModifiers::CONTROL) => FormAction::Submit,
        (KeyCode::Esc | KeyCode::Char('q'), _) => FormAction::Abort,
        _ => FormAction::Ignored,
    }
}

fn map_picker_key(key: KeyEvent) -> FormAction {
    let event = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => PickerEvent::Dismiss,
        (KeyCode::Enter, _) => PickerEvent::Commit,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => PickerEvent::Up,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => PickerEvent::Down,
        (KeyCode::PageUp, _) => PickerEvent::PageUp,
        (KeyCode::PageDown, _) => PickerEvent::PageDown,
        (KeyCode::Home, _) => PickerEvent::Home,
        (KeyCode::End, _) => PickerEvent::End,

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => PickerEvent::ClearQuery,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => PickerEvent::DeleteWord,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => PickerEvent::Input(c),
        (KeyCode::Backspace, _) => PickerEvent::Backspace,
        (KeyCode::Delete, _) => PickerEvent::Delete,
        (KeyCode::Left, _) => PickerEvent::CursorLeft,
        (KeyCode::Right, _) => PickerEvent::CursorRight,

        _ => return FormAction::Ignored,
    };
    FormAction::Picker(event)
}

/// Map a mouse event against the regions drawn in the last frame
///
/// `scroll_offset` converts a clicked list row into a visible position.
#[must_use]
pub fn map_mouse(
    mouse: MouseEvent,
    areas: &HitAreas,
    picker_open: bool,
    scroll_offset: usize,
) -> FormAction {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp if picker_open => FormAction::Picker(PickerEvent::Up),
        MouseEventKind::ScrollDown if picker_open => FormAction::Picker(PickerEvent::Down),
        MouseEventKind::Down(MouseButton::Left) if picker_open => {
            if areas.dialog.list.contains(position) {
                let row = usize::from(mouse.row - areas.dialog.list.y);
                FormAction::Picker(PickerEvent::Click(scroll_offset + row))
            } else if areas.dialog.dialog.contains(position) {
                FormAction::Ignored
            } else {
                // Backdrop
                FormAction::Picker(PickerEvent::Dismiss)
            }
        }
        MouseEventKind::Down(MouseButton::Left) if areas.trigger.contains(position) => {
            FormAction::Picker(PickerEvent::ActivateTrigger)
        }
        _ => FormAction::Ignored,
    }
}

/// Poll for an event
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}
