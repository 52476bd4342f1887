//! Voxpick CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick a voice interactively (default command)
//! voxpick --catalog voices.json
//! voxpick pick --value v2 --clear-query-on-open
//!
//! # Drive the open flag from the form (controlled mode)
//! voxpick pick --open-state form
//!
//! # List the voices a query would show
//! voxpick filter ra
//! voxpick --fuzzy filter rchl
//!
//! # Print the trigger label for a value
//! voxpick label v2
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/voxpick/config.toml` on Linux). Diagnostics are written to a
//! log file because the interactive form owns the terminal.

use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use voxpick::{
    VoxpickError, catalog,
    cli::{Cli, Commands},
    commands,
    config::VoxpickConfig,
    ui::{OutputWriter, PickerApp, StdoutWriter},
};

type Result<T> = std::result::Result<T, VoxpickError>;

/// Install the file logger
///
/// Logging problems never stop the program; they are reported once.
fn init_logging(config: &VoxpickConfig, out: &dyn OutputWriter) {
    let level = config.log_level.to_filter();
    if level == log::LevelFilter::Off {
        return;
    }

    let result = config
        .log_path()
        .map_err(VoxpickError::from)
        .and_then(|path| {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            Ok(File::options().create(true).append(true).open(path)?)
        })
        .and_then(|file| {
            let log_config = ConfigBuilder::new().set_target_level(level).build();
            WriteLogger::init(level, log_config, file)
                .map_err(|e| VoxpickError::InvalidInput(e.to_string()))
        });

    if let Err(e) = result {
        out.warning(&format!("Logging disabled: {e}"));
    }
}

fn run(cli: &Cli, config: &VoxpickConfig, out: &dyn OutputWriter) -> Result<()> {
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            VoxpickError::InvalidInput(
                "No catalog given. Pass --catalog <FILE> or set 'catalog' in the config file."
                    .into(),
            )
        })?;
    let items = catalog::load(&catalog_path)?;

    let command = cli.get_command();

    let mut builder = config.picker_builder();
    if let Some(placeholder) = &cli.placeholder {
        builder = builder.placeholder(placeholder.clone());
    }
    if let Some(mode) = cli.get_match_mode() {
        builder = builder.match_mode(mode);
    }
    if let Some(retention) = command.get_query_retention() {
        builder = builder.query_retention(retention);
    }

    match command {
        Commands::Pick {
            value,
            open_state,
            stay,
            ..
        } => {
            let app = PickerApp::new()
                .with_ownership(open_state.into())
                .exit_on_commit(!stay);
            commands::pick(&items, builder, &app, value, out)?;
        }
        Commands::Filter { query } => {
            let mode = cli.get_match_mode().unwrap_or(config.match_mode);
            commands::filter(&items, &query, mode, cli.quiet, out)?;
        }
        Commands::Label { id } => {
            commands::label(&items, id.as_deref(), builder, cli.quiet, out)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse_args();
    let out = StdoutWriter::with_quiet(cli.quiet);

    let config = match VoxpickConfig::load() {
        Ok(config) => config,
        Err(e) => {
            out.warning(&format!("Using default configuration: {e}"));
            VoxpickConfig::default()
        }
    };
    init_logging(&config, &out);

    if let Err(e) = run(&cli, &config, &out) {
        log::error!("{e}");
        out.error(&e.to_string());
        std::process::exit(1);
    }
}
