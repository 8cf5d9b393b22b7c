mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use siteswap_core::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (defaults to warn unless RUST_LOG or --verbose is set)
    let default_filter = if args.verbose {
        "siteswap_cli=debug,siteswap_core=debug"
    } else {
        "siteswap_cli=warn,siteswap_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    match args.command {
        Command::Validate { pattern, json } => commands::validate::run(&pattern, json),
        Command::Plan {
            pattern,
            repetitions,
            format,
            output,
        } => commands::plan::run(
            &pattern,
            &config,
            repetitions,
            format.map(Into::into),
            output.as_deref(),
        ),
    }
}
