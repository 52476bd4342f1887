//! Ratatui widgets for the picker TUI
//!
//! Custom widgets for rendering the form and the picker dialog.

mod help_bar;
mod picker_dialog;
mod search_bar;
mod trigger;
mod voice_list;

pub use help_bar::{FORM_HINTS, HelpBar, KeyHint, PICKER_HINTS};
pub use picker_dialog::{DialogLayout, PickerDialog};
pub use search_bar::SearchBar;
pub use trigger::Trigger;
pub use voice_list::VoiceList;
