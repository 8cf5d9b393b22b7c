//! Export formats for validated patterns and flight schedules.

mod console;

pub use console::*;

use std::fs;
use std::path::Path;

use serde_json::{Value as JsonValue, json};

use crate::error::Result;
use crate::pattern::ThrowPattern;
use crate::plan::SimulationPlan;

pub fn format_plan_tsv_header() -> String {
    [
        "ball",
        "height",
        "start_beat",
        "end_beat",
        "from_hand",
        "to_hand",
    ]
    .join("\t")
}

/// One TSV line per flight, header first.
pub fn plan_to_tsv(plan: &SimulationPlan) -> String {
    let mut lines = Vec::with_capacity(plan.len() + 1);
    lines.push(format_plan_tsv_header());

    for flight in plan.flights() {
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            flight.ball_id,
            flight.throw_height,
            flight.start_beat,
            flight.end_beat,
            flight.from_hand,
            flight.to_hand,
        ));
    }

    lines.join("\n")
}

pub fn pattern_to_json_value(pattern: &ThrowPattern) -> JsonValue {
    json!({
        "notation": pattern.to_notation(),
        "heights": pattern.heights(),
        "period": pattern.period(),
        "ball_count": pattern.ball_count(),
        "max_throw_height": pattern.max_throw_height(),
    })
}

pub fn pattern_to_json(pattern: &ThrowPattern) -> Result<String> {
    Ok(serde_json::to_string_pretty(&pattern_to_json_value(pattern))?)
}

/// Pattern metadata plus the full flight list.
pub fn plan_to_json(pattern: &ThrowPattern, plan: &SimulationPlan) -> Result<String> {
    let value = json!({
        "pattern": pattern_to_json_value(pattern),
        "total_beats": plan.total_beats(),
        "ball_count": plan.ball_count(),
        "flights": plan.flights(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Write exported content to a file.
pub fn write_export<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
