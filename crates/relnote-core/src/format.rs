//! Output format handling for relnote
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and LLM context injection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelnoteError;

/// Output format for relnote commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented consumers
    Records,
}

impl FromStr for OutputFormat {
    type Err = RelnoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(RelnoteError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Name shown for a note path
///
/// With folders: the path minus its first `.md`. Without: the last path
/// segment minus its first `.md`.
pub fn display_name(path: &str, show_folder_names: bool) -> String {
    let shown = if show_folder_names {
        path
    } else {
        path.rsplit('/').next().unwrap_or(path)
    };
    shown.replacen(".md", "", 1)
}

/// Width of a score bar in percent, scaled by ten and capped at 100
pub fn score_bar_percent(score: f64) -> u8 {
    (score * 10.0).round().clamp(0.0, 100.0) as u8
}

/// Escape double quotes for embedding in a quoted records field
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}
