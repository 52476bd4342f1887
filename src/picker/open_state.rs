//! Open/closed ownership
//!
//! The mode is fixed when the picker is built. A controlled picker only
//! mirrors the value its host pushes in and forwards every requested
//! transition to the host's setter; an uncontrolled picker owns the flag.

use super::error::{PickerError, Result};
use std::fmt;

/// Host setter invoked when a controlled picker wants to open or close
pub type OpenChange = Box<dyn FnMut(bool)>;

/// Who owns the open flag
pub enum OpenState {
    /// The picker owns the flag, initially closed
    Uncontrolled {
        /// Current visibility
        open: bool,
    },
    /// The host owns the flag
    Controlled {
        /// Last value pushed by the host
        open: bool,
        /// Host setter
        on_open_change: OpenChange,
    },
}

impl OpenState {
    /// Pick the mode from the host-supplied pair
    ///
    /// Presence of `open` selects controlled mode regardless of its value.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::PartialControl` when exactly one half of the
    /// pair is supplied.
    pub fn from_parts(open: Option<bool>, on_open_change: Option<OpenChange>) -> Result<Self> {
        match (open, on_open_change) {
            (Some(open), Some(on_open_change)) => Ok(Self::Controlled {
                open,
                on_open_change,
            }),
            (None, None) => Ok(Self::Uncontrolled { open: false }),
            (Some(_), None) => Err(PickerError::PartialControl { supplied: "open" }),
            (None, Some(_)) => Err(PickerError::PartialControl {
                supplied: "on_open_change",
            }),
        }
    }

    /// Current visibility
    #[must_use]
    pub const fn is_open(&self) -> bool {
        match self {
            Self::Uncontrolled { open } | Self::Controlled { open, .. } => *open,
        }
    }

    /// Whether the host owns the flag
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Request a transition through the active mode
    ///
    /// Uncontrolled pickers apply it immediately. Controlled pickers leave
    /// their copy untouched and notify the host, which may or may not sync
    /// a new value back.
    pub(crate) fn request(&mut self, open: bool) {
        match self {
            Self::Uncontrolled { open: current } => *current = open,
            Self::Controlled { on_open_change, .. } => on_open_change(open),
        }
    }

    /// Accept a value pushed by the host
    pub(crate) fn sync(&mut self, value: bool) -> Result<()> {
        match self {
            Self::Controlled { open, .. } => {
                *open = value;
                Ok(())
            }
            Self::Uncontrolled { .. } => Err(PickerError::NotControlled),
        }
    }
}

impl fmt::Debug for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncontrolled { open } => f
                .debug_struct("Uncontrolled")
                .field("open", open)
                .finish(),
            Self::Controlled { open, .. } => f
                .debug_struct("Controlled")
                .field("open", open)
                .finish_non_exhaustive(),
        }
    }
}
