//! labdx-cli
//!
//! Command-line surface over the labdx engine: config resolution, table
//! loading, and the `analyze` / `ranges` / `init-config` commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod tables;

use std::path::Path;

use cli::{Cli, Command};
use tables::Tables;

/// Execute a parsed command line and return what should go to stdout.
pub fn run(cli: Cli) -> eyre::Result<String> {
    let config = config::resolve_config(cli.config.as_deref())?;

    let reference_path = cli.reference_table.or(config.reference_table.clone());
    let pattern_path = cli.pattern_table.or(config.pattern_table.clone());

    match cli.command {
        Command::Analyze {
            file,
            format,
            pretty,
        } => {
            let tables = Tables::load(reference_path.as_deref(), pattern_path.as_deref())?;
            let input = read_input(file.as_deref())?;
            let format = format.unwrap_or(config.default_format);
            commands::analyze(&input, &tables, format, pretty)
        }
        Command::Ranges { category } => {
            let tables = Tables::load(reference_path.as_deref(), pattern_path.as_deref())?;
            Ok(commands::ranges(&tables, category.as_deref()))
        }
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => config::default_config_path()?,
            };
            let new_config = config::LabdxConfig {
                reference_table: reference_path,
                pattern_table: pattern_path,
                ..config
            }
            .with_absolute_tables()?;
            config::save_config(&path, &new_config)?;
            Ok(format!("wrote {}\n", path.display()))
        }
    }
}

fn read_input(file: Option<&Path>) -> eyre::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display())),
        _ => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}
