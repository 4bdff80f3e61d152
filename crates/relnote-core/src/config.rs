//! Settings for relnote
//!
//! Configuration is stored in `.relnote/config.toml`. The engine only ever
//! sees an [`AnalysisConfig`] value passed in by the caller.

pub mod exclusion;
pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{RelnoteError, Result};

pub use exclusion::ExclusionSet;
pub use types::{
    AnalysisConfig, DisplayConfig, RelnoteConfig, CONFIG_FORMAT_VERSION, DEFAULT_DISPLAY_LIMIT,
};

/// Directory holding relnote files inside a vault root
pub const RELNOTE_DIR: &str = ".relnote";

/// Config file name inside [`RELNOTE_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

impl RelnoteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RelnoteError::io_operation("read", path.display(), e))?;
        let config: RelnoteConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", config.version);
        }
        if config.display.limit == 0 {
            bail_invalid!("display limit", config.display.limit);
        }

        tracing::debug!(
            path = %path.display(),
            exclusions = config.analysis.exclusions().prefixes().len(),
            "config_loaded"
        );

        Ok(config)
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config_missing_using_defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)
            .map_err(|e| RelnoteError::io_operation("write", path.display(), e))?;
        Ok(())
    }
}
