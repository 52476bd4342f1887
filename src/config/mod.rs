//! Configuration module for voxpick
//! 
//! Manages picker defaults and logging settings.
//! Configuration is stored in the user's config directory
//! (`~/.config/voxpick/config.toml` on Linux) and created with defaults on
//! first load.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::picker::{DEFAULT_PLACEHOLDER, MatchMode, PickerBuilder, QueryRetention};

/// Log verbosity written to the log file
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    /// Logging disabled
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate's filter
    #[must_use]
    pub const fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VoxpickConfig {
    /// Trigger text shown when nothing is selected
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// How queries are matched against voice names
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Whether the query survives closing and reopening the picker
    #[serde(default)]
    pub query_retention: QueryRetention,

    /// Catalog file used when `--catalog` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Log file location (defaults to the user data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for VoxpickConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            match_mode: MatchMode::default(),
            query_retention: QueryRetention::default(),
            catalog: None,
            log_file: None,
            log_level: LogLevel::default(),
        }
    }
}

impl VoxpickConfig {
    /// Get the path to the config file
    /// 
    /// # Errors
    /// 
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        
        Ok(config_dir.join("voxpick").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    /// 
    /// # Errors
    /// 
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if missing
    /// 
    /// # Errors
    /// 
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }
        
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;
        
        settings.try_deserialize()
    }

    /// Save configuration to the default location
    /// 
    /// # Errors
    /// 
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    /// 
    /// # Errors
    /// 
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }
        
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;
        
        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;
        
        Ok(())
    }

    /// Resolved log file path
    /// 
    /// # Errors
    /// 
    /// Returns `ConfigError` if no log file is configured and the system data
    /// directory cannot be determined.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("voxpick").join("voxpick.log"))
    }

    /// Picker builder pre-filled with this configuration
    #[must_use]
    pub fn picker_builder(&self) -> PickerBuilder {
        PickerBuilder::default()
            .placeholder(self.placeholder.clone())
            .match_mode(self.match_mode)
            .query_retention(self.query_retention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = VoxpickConfig::default();
        assert_eq!(config.placeholder, "Select a voice...");
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert_eq!(config.query_retention, QueryRetention::Keep);
        assert!(config.catalog.is_none());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = VoxpickConfig::load_from(&path).unwrap();
        assert_eq!(config, VoxpickConfig::default());
        assert!(path.exists());

        let reloaded = VoxpickConfig::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "match_mode = \"fuzzy\"\nquery_retention = \"clear_on_open\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = VoxpickConfig::load_from(&path).unwrap();
        assert_eq!(config.match_mode, MatchMode::Fuzzy);
        assert_eq!(config.query_retention, QueryRetention::ClearOnOpen);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.placeholder, "Select a voice...");
    }

    #[test]
    fn test_save_round_trips_catalog_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = VoxpickConfig {
            placeholder: "Choose...".to_string(),
            catalog: Some(PathBuf::from("/srv/voices.json")),
            ..VoxpickConfig::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(VoxpickConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_log_path_override() {
        let config = VoxpickConfig {
            log_file: Some(PathBuf::from("/tmp/voxpick-test.log")),
            ..VoxpickConfig::default()
        };
        assert_eq!(
            config.log_path().unwrap(),
            PathBuf::from("/tmp/voxpick-test.log")
        );
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Off.to_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Trace.to_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_picker_builder_applies_settings() {
        let config = VoxpickConfig {
            placeholder: "Pick".to_string(),
            match_mode: MatchMode::Fuzzy,
            query_retention: QueryRetention::ClearOnOpen,
            ..VoxpickConfig::default()
        };
        let picker = config.picker_builder().build().unwrap();
        assert_eq!(picker.placeholder(), "Pick");
        assert_eq!(picker.match_mode(), MatchMode::Fuzzy);
        assert_eq!(picker.retention(), QueryRetention::ClearOnOpen);
    }
}
