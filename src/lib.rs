//! Voxpick - a searchable single-select voice picker
//!
//! This library provides a headless picker component that filters a voice
//! catalog by free-text query and commits one selection back to its host,
//! plus a terminal host built on ratatui.
//!
//! - [`catalog`]: voice items and catalog loading (JSON/CSV)
//! - [`picker`]: the picker state machine, filter engine and commit protocol
//! - [`ui`]: terminal form hosting the picker, and CLI output
//! - [`config`]: user configuration

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod picker;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VoxpickError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Picker contract error
    #[error("Picker error: {0}")]
    PickerError(#[from] picker::PickerError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
