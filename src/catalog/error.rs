//! Catalog-specific error types
//!
//! These errors surface while reading a voice catalog from disk or while
//! validating a catalog supplied by a host. The picker itself never
//! produces them.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog JSON was malformed
    #[error("Invalid JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Catalog CSV was malformed
    #[error("Invalid CSV catalog: {0}")]
    CsvError(#[from] csv::Error),

    /// File extension is not a known catalog format
    #[error("Unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Two items share the same id
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    /// An item has a blank id
    #[error("Item at position {0} has an empty id")]
    EmptyId(usize),

    /// An item has a blank display name
    #[error("Item '{0}' has an empty display name")]
    EmptyDisplayName(String),

    /// A CSV tag entry was not in `key=value` form
    #[error("Item '{id}' has an invalid tag entry '{entry}' (expected key=value)")]
    InvalidTag {
        /// Item the tag belongs to
        id: String,
        /// The offending entry
        entry: String,
    },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
