//! Catalog file loaders
//!
//! Two on-disk formats are accepted, chosen by file extension:
//!
//! - `.json`: an array of [`Item`] objects (`name`, `labels` and
//!   `preview_url` are accepted as aliases)
//! - `.csv`: columns `id,display_name,tags,description,preview_ref`, where
//!   `tags` is `key=value;key=value`
//!
//! Every loader validates the result before returning it.

use super::error::{CatalogError, Result};
use super::{Item, validate};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load and validate a catalog file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, has an unknown
/// extension, fails to parse, or violates catalog invariants.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let items = match extension.as_deref() {
        Some("json") => from_json_str(&fs::read_to_string(path)?)?,
        Some("csv") => from_csv_reader(fs::File::open(path)?)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };

    log::info!("Loaded {} catalog items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse a JSON array of items
///
/// # Errors
///
/// Returns `CatalogError` on malformed JSON or invalid items.
pub fn from_json_str(json: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    validate(&items)?;
    Ok(items)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    #[serde(alias = "name")]
    display_name: String,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "preview_url")]
    preview_ref: Option<String>,
}

/// Parse CSV catalog rows (header row required)
///
/// # Errors
///
/// Returns `CatalogError` on malformed CSV, bad tag entries, or invalid items.
pub fn from_csv_reader(reader: impl Read) -> Result<Vec<Item>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        let row = row?;
        let tags = parse_tags(&row.id, row.tags.as_deref().unwrap_or_default())?;
        items.push(Item {
            id: row.id,
            display_name: row.display_name,
            tags,
            description: row.description,
            preview_ref: row.preview_ref,
        });
    }

    validate(&items)?;
    Ok(items)
}

/// Parse `key=value;key=value` into a tag map, skipping empty entries
fn parse_tags(id: &str, raw: &str) -> Result<BTreeMap<String, String>> {
    let mut tags = BTreeMap::new();
    for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((key, value)) = entry.split_once('=') else {
            return Err(CatalogError::InvalidTag {
                id: id.to_string(),
                entry: entry.to_string(),
            });
        };
        tags.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(tags)
}
