//! CLI argument definitions for siteswap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use siteswap_core::OutputFormat;

#[derive(Parser)]
#[command(name = "siteswap")]
#[command(about = "Siteswap validator and flight planner", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, global = true, default_value = "siteswap.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a pattern and print its metadata
    Validate {
        /// Siteswap notation (e.g., 531)
        pattern: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Expand a pattern into a beat-by-beat flight schedule
    Plan {
        /// Siteswap notation (e.g., 531)
        pattern: String,
        /// Number of pattern repetitions to simulate
        #[arg(short, long, env = "SITESWAP_REPETITIONS")]
        repetitions: Option<usize>,
        /// Output format (defaults to the config value)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Console,
    Tsv,
    Json,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Console => OutputFormat::Console,
            ExportFormat::Tsv => OutputFormat::Tsv,
            ExportFormat::Json => OutputFormat::Json,
        }
    }
}
