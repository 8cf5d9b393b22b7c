//! Plan command implementation.
//!
//! Validates the pattern, expands it into flights and writes the schedule in
//! the requested format, to stdout or a file.

use std::path::Path;

use anyhow::{Context, Result};
use siteswap_core::export::{format_plan_console, plan_to_json, plan_to_tsv, write_export};
use siteswap_core::pattern::validate;
use siteswap_core::plan::plan;
use siteswap_core::{Config, OutputFormat};
use tracing::debug;

/// Run the plan command
pub fn run(
    pattern: &str,
    config: &Config,
    repetitions: Option<usize>,
    format: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let pattern = validate(pattern)?;
    let repetitions = repetitions.unwrap_or(config.planner.repetitions);
    let format = format.unwrap_or(config.output.format);
    debug!("Planning {} x{} as {}", pattern, repetitions, format);

    let schedule = plan(&pattern, pattern.ball_count(), repetitions)
        .with_context(|| format!("Failed to plan pattern {}", pattern))?;

    let content = match format {
        OutputFormat::Console => format_plan_console(&pattern, &schedule),
        OutputFormat::Tsv => plan_to_tsv(&schedule),
        OutputFormat::Json => plan_to_json(&pattern, &schedule)?,
    };

    if let Some(output_path) = output {
        write_export(output_path, &content)?;
        eprintln!("Exported {} flights to: {}", schedule.len(), output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
