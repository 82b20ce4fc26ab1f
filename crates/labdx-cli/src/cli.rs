use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Rule-based lab panel analysis.
#[derive(Debug, Parser)]
#[command(name = "labdx", version, about)]
pub struct Cli {
    /// Config file (defaults to the platform config dir, if present).
    #[arg(long, global = true, env = "LABDX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reference table JSON, overriding config and built-in data.
    #[arg(long, global = true)]
    pub reference_table: Option<PathBuf>,

    /// Pattern table JSON, overriding config and built-in data.
    #[arg(long, global = true)]
    pub pattern_table: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a JSON object of lab values read from FILE or stdin.
    Analyze {
        /// Input file; `-` or omitted reads stdin.
        file: Option<PathBuf>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Pretty-print JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// List the active reference ranges.
    Ranges {
        /// Only show one category (case-insensitive).
        #[arg(long)]
        category: Option<String>,
    },
    /// Write a config file with the current settings.
    InitConfig {
        /// Destination (defaults to the platform config dir).
        path: Option<PathBuf>,
    },
}
