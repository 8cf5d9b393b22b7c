//! Validate command implementation.

use anyhow::Result;
use siteswap_core::export::{format_pattern_console, pattern_to_json};
use siteswap_core::pattern::validate;

/// Run the validate command
pub fn run(pattern: &str, json: bool) -> Result<()> {
    let pattern = validate(pattern)?;

    if json {
        println!("{}", pattern_to_json(&pattern)?);
    } else {
        println!("{}", format_pattern_console(&pattern));
    }

    Ok(())
}
