//! Configuration file support.
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [planner]
//! repetitions = 6
//!
//! [output]
//! format = "json"
//! ```
//!
//! Every section and key is optional; missing values fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Result;
use crate::plan::DEFAULT_REPETITIONS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub planner: PlannerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Pattern periods to materialize per plan.
    pub repetitions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Tsv,
    Json,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.planner.repetitions, 6);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse("[planner]\nrepetitions = 2\n").unwrap();
        assert_eq!(config.planner.repetitions, 2);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_parse_format() {
        let config = Config::parse("[output]\nformat = \"tsv\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Tsv);
    }

    #[test]
    fn test_parse_invalid() {
        let result = Config::parse("[planner]\nrepetitions = \"many\"\n");
        assert!(matches!(result, Err(Error::ConfigParseError(_))));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[planner]\nrepetitions = 3\n[output]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.planner.repetitions, 3);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/siteswap.toml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
