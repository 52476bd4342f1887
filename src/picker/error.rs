//! Picker error types
//!
//! The picker is pure and synchronous; the only failures are contract
//! violations by the host, reported at construction or on controlled sync.

use thiserror::Error;

/// Host contract violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    /// Only one half of the controlled open pair was supplied
    #[error("Controlled open state needs both `open` and `on_open_change`; only `{supplied}` was given")]
    PartialControl {
        /// The half that was supplied
        supplied: &'static str,
    },

    /// The host pushed an open value into a picker that owns its own state
    #[error("Picker open state is uncontrolled and cannot be synced from the host")]
    NotControlled,
}

/// Result type for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;
