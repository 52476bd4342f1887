//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for voxpick using the `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Open the interactive voice form (default)
//! - **filter**: Print the voices a query would show
//! - **label**: Print the trigger label for a value
//!
//! Global flags (`--catalog`, `--placeholder`, `--fuzzy`, `--quiet`) override
//! the configuration file.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use voxpick::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["voxpick", "--fuzzy", "filter", "ra"]);
//! assert!(cli.fuzzy);
//! assert!(matches!(cli.get_command(), Commands::Filter { .. }));
//! ```

use crate::picker::{MatchMode, QueryRetention};
use crate::ui::OpenOwnership;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Who owns the picker's open flag in the interactive form
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenStateArg {
    /// The picker opens and closes itself
    #[default]
    Picker,
    /// The form drives the picker (controlled mode)
    Form,
}

impl From<OpenStateArg> for OpenOwnership {
    fn from(arg: OpenStateArg) -> Self {
        match arg {
            OpenStateArg::Picker => Self::Picker,
            OpenStateArg::Form => Self::Form,
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "voxpick")]
#[command(about = "A searchable voice picker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Voice catalog (JSON or CSV, overrides config)
    #[arg(short = 'c', long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Trigger text shown when nothing is selected (overrides config)
    #[arg(long = "placeholder", value_name = "TEXT", global = true)]
    pub placeholder: Option<String>,

    /// Use fuzzy matching instead of substring matching
    #[arg(long = "fuzzy", global = true)]
    pub fuzzy: bool,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive voice form (default)
    #[command(visible_alias = "p")]
    Pick {
        /// Initially selected voice id
        #[arg(long = "value", value_name = "ID")]
        value: Option<String>,

        /// Reset the search query every time the picker opens
        #[arg(long = "clear-query-on-open")]
        clear_query_on_open: bool,

        /// Who owns the open flag
        #[arg(long = "open-state", value_enum, default_value_t = OpenStateArg::Picker)]
        open_state: OpenStateArg,

        /// Keep the form open after choosing (save with `s`)
        #[arg(long = "stay")]
        stay: bool,
    },

    /// Print the voices matching a query
    #[command(visible_alias = "f")]
    Filter {
        /// Search query (empty lists every voice)
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },

    /// Print the trigger label for a voice id
    #[command(visible_alias = "l")]
    Label {
        /// Selected voice id
        #[arg(value_name = "ID")]
        id: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick {
            value: None,
            clear_query_on_open: false,
            open_state: OpenStateArg::default(),
            stay: false,
        })
    }

    /// Match mode override from global flags
    #[must_use]
    pub const fn get_match_mode(&self) -> Option<MatchMode> {
        if self.fuzzy {
            Some(MatchMode::Fuzzy)
        } else {
            None
        }
    }
}

impl Commands {
    /// Query retention override for the pick command
    #[must_use]
    pub const fn get_query_retention(&self) -> Option<QueryRetention> {
        match self {
            Self::Pick {
                clear_query_on_open: true,
                ..
            } => Some(QueryRetention::ClearOnOpen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_pick() {
        let cli = Cli::parse_from(["voxpick"]);
        assert!(cli.command.is_none());
        assert_eq!(
            cli.get_command(),
            Commands::Pick {
                value: None,
                clear_query_on_open: false,
                open_state: OpenStateArg::Picker,
                stay: false,
            }
        );
    }

    #[test]
    fn test_parse_pick_options() {
        let cli = Cli::parse_from([
            "voxpick",
            "pick",
            "--value",
            "v2",
            "--clear-query-on-open",
            "--open-state",
            "form",
        ]);
        let command = cli.get_command();
        assert_eq!(
            command.get_query_retention(),
            Some(QueryRetention::ClearOnOpen)
        );
        if let Commands::Pick {
            value, open_state, ..
        } = command
        {
            assert_eq!(value.as_deref(), Some("v2"));
            assert_eq!(OpenOwnership::from(open_state), OpenOwnership::Form);
        } else {
            panic!("Expected Pick command");
        }
    }

    #[test]
    fn test_parse_filter_with_globals_after_subcommand() {
        let cli = Cli::parse_from(["voxpick", "f", "ra", "--catalog", "voices.json", "-q"]);
        assert_eq!(
            cli.get_command(),
            Commands::Filter {
                query: "ra".to_string()
            }
        );
        assert_eq!(cli.catalog, Some(PathBuf::from("voices.json")));
        assert!(cli.quiet);
        assert_eq!(cli.get_match_mode(), None);
    }

    #[test]
    fn test_parse_filter_without_query() {
        let cli = Cli::parse_from(["voxpick", "filter"]);
        assert_eq!(
            cli.get_command(),
            Commands::Filter {
                query: String::new()
            }
        );
    }

    #[test]
    fn test_parse_label() {
        let cli = Cli::parse_from(["voxpick", "--fuzzy", "label", "v9"]);
        assert_eq!(cli.get_match_mode(), Some(MatchMode::Fuzzy));
        assert_eq!(
            cli.get_command(),
            Commands::Label {
                id: Some("v9".to_string())
            }
        );
        assert_eq!(cli.get_command().get_query_retention(), None);
    }

    #[test]
    fn test_invalid_open_state_rejected() {
        assert!(Cli::try_parse_from(["voxpick", "pick", "--open-state", "both"]).is_err());
    }
}
