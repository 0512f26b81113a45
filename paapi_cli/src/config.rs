// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Output rendering for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Defaults read from the environment
///
/// `PAAPI_REPORT_ALL` accepts `true` or `false`. `PAAPI_OUTPUT_FORMAT` accepts
/// `text` or `json` in any case. Other values fall back to the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliPreferences {
    /// Whether `validate` reports every invalid resource instead of the first
    pub report_all: bool,

    /// Default output format when `--format` is not given
    pub output_format: OutputFormat,
}

impl Default for CliPreferences {
    fn default() -> Self {
        Self {
            report_all: env::var("PAAPI_REPORT_ALL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            output_format: env::var("PAAPI_OUTPUT_FORMAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl CliPreferences {
    /// Apply command-line overrides on top of environment defaults
    pub fn with_overrides(
        mut self,
        report_all: Option<bool>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(report_all) = report_all {
            self.report_all = report_all;
        }
        if let Some(format) = format {
            self.output_format = format;
        }
        self
    }
}
