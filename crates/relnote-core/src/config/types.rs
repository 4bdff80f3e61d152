//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::exclusion::ExclusionSet;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default number of results shown by list-style consumers
pub const DEFAULT_DISPLAY_LIMIT: usize = 50;

/// Settings file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelnoteConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Scoring configuration handed to the engine on every call
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Presentation settings, never read by the engine
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Per-call configuration for a related-note analysis
///
/// Callers build a fresh value before each `calculate`; the engine keeps
/// no reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Newline-separated path prefixes removed from the similarity graph
    #[serde(default)]
    pub excluded_folders: String,

    /// Add the query's outgoing links as zero-score results
    #[serde(default = "default_true")]
    pub include_outgoing_direct_links: bool,

    /// Add the query's backlinks as zero-score results
    #[serde(default = "default_true")]
    pub include_backlink_direct_links: bool,
}

/// Presentation settings for result lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show full paths instead of bare note names
    #[serde(default)]
    pub show_folder_names: bool,

    /// Maximum number of results to print
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl AnalysisConfig {
    /// Parse the configured exclusion prefixes
    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::parse(&self.excluded_folders)
    }

    /// Whether any direct-link augmentation is enabled
    pub fn includes_direct_links(&self) -> bool {
        self.include_outgoing_direct_links || self.include_backlink_direct_links
    }

    /// Append an exclusion prefix on its own line
    pub fn add_excluded_folder(&mut self, prefix: &str) {
        if !self.excluded_folders.is_empty() && !self.excluded_folders.ends_with('\n') {
            self.excluded_folders.push('\n');
        }
        self.excluded_folders.push_str(prefix);
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_true() -> bool {
    true
}

fn default_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

impl Default for RelnoteConfig {
    fn default() -> Self {
        RelnoteConfig {
            version: CONFIG_FORMAT_VERSION,
            analysis: AnalysisConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            excluded_folders: String::new(),
            include_outgoing_direct_links: default_true(),
            include_backlink_direct_links: default_true(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_folder_names: false,
            limit: default_limit(),
        }
    }
}
