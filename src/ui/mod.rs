//! UI layer
//!
//! The picker core in [`crate::picker`] is frontend-neutral. This module
//! hosts it in a terminal:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Commands (pick, filter, label)     │
//! └────────────────┬────────────────────────┘
//!                  │
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ OutputWriter  │  │ PickerApp         │
//! │ (stdout)      │  │ (ratatui form +   │
//! │               │  │  picker dialog)   │
//! └───────────────┘  └─────────┬─────────┘
//!                              │ PickerEvent
//!                              ▼
//!                    ┌───────────────────┐
//!                    │ picker::Picker    │
//!                    └───────────────────┘
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{OutputWriter, StdoutWriter};
pub use ratatui_adapter::{FormResult, OpenOwnership, PickerApp};
