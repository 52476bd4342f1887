//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Picker was built with an inconsistent contract
    #[error("Invalid picker configuration: {0}")]
    PickerError(#[from] crate::picker::PickerError),

    /// UI operation was interrupted or cancelled
    #[error("UI operation was interrupted")]
    InterruptedError,

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::PickerError;

    #[test]
    fn test_picker_error_conversion() {
        let error: UiError = PickerError::NotControlled.into();
        assert!(error.to_string().starts_with("Invalid picker configuration"));
    }

    #[test]
    fn test_interrupted_display() {
        assert_eq!(
            UiError::InterruptedError.to_string(),
            "UI operation was interrupted"
        );
    }
}
