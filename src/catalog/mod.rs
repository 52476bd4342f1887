//! Voice catalog model
//!
//! The catalog is the externally supplied, ordered collection of selectable
//! [`Item`]s. The picker borrows it on every render and never caches
//! references into it, so hosts are free to replace it wholesale.
//!
//! Catalogs can be built in code or loaded from JSON / CSV files:
//!
//! ```no_run
//! use voxpick::catalog::{self, Item};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let from_disk = catalog::load("voices.json")?;
//!
//! let in_code = vec![
//!     Item::new("v1", "Rachel").with_tag("accent", "american"),
//!     Item::new("v2", "Adam").with_description("Deep, narrative voice"),
//! ];
//! catalog::validate(&in_code)?;
//! # let _ = from_disk;
//! # Ok(())
//! # }
//! ```

mod error;
mod loader;

pub use error::{CatalogError, Result};
pub use loader::{from_csv_reader, from_json_str, load};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One selectable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Human-readable label, the only field the filter looks at
    #[serde(alias = "name")]
    pub display_name: String,
    /// Decorative metadata (accent, age, gender, language, use case, ...)
    #[serde(default, alias = "labels")]
    pub tags: BTreeMap<String, String>,
    /// Free text, rendered truncated
    #[serde(default)]
    pub description: Option<String>,
    /// Opaque reference to a sample asset; shown as an affordance only
    #[serde(default, alias = "preview_url")]
    pub preview_ref: Option<String>,
}

impl Item {
    /// Create an item with no metadata
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            tags: BTreeMap::new(),
            description: None,
            preview_ref: None,
        }
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, category: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(category.into(), value.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the preview reference
    #[must_use]
    pub fn with_preview(mut self, preview_ref: impl Into<String>) -> Self {
        self.preview_ref = Some(preview_ref.into());
        self
    }

    /// Whether a preview asset is attached
    #[must_use]
    pub const fn has_preview(&self) -> bool {
        self.preview_ref.is_some()
    }

    /// Tag values joined for display, in category order
    #[must_use]
    pub fn tag_summary(&self) -> String {
        self.tags
            .values()
            .filter(|v| !v.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// Description cut to at most `max_chars` characters, with an ellipsis
    /// when anything was dropped
    #[must_use]
    pub fn truncated_description(&self, max_chars: usize) -> Option<String> {
        let description = self.description.as_deref()?.trim();
        if description.is_empty() {
            return None;
        }
        if description.chars().count() <= max_chars {
            return Some(description.to_string());
        }
        let kept: String = description
            .chars()
            .take(max_chars.saturating_sub(1))
            .collect();
        Some(format!("{}…", kept.trim_end()))
    }
}

/// Look up an item by id
///
/// This is the only way the picker resolves a selection; the result is never
/// stored.
#[must_use]
pub fn find<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.id == id)
}

/// Check catalog invariants: non-empty unique ids and non-empty display names
///
/// # Errors
///
/// Returns the first violation found, in catalog order.
pub fn validate(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(CatalogError::EmptyId(position));
        }
        if item.display_name.trim().is_empty() {
            return Err(CatalogError::EmptyDisplayName(item.id.clone()));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}
