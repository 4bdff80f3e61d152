//! `relnote init` command - write a default config file
//!
//! Refuses to overwrite an existing file unless `--force` is given.

use crate::cli::Cli;
use crate::commands::dispatch::VaultPaths;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use relnote_core::config::RelnoteConfig;
use relnote_core::error::{RelnoteError, Result};

/// Execute the init command
pub fn execute(cli: &Cli, paths: &VaultPaths, force: bool) -> Result<()> {
    if paths.config.exists() && !force {
        return Err(RelnoteError::already_exists(
            "config",
            paths.config.display(),
        ));
    }

    RelnoteConfig::default().save(&paths.config)?;
    tracing::debug!(path = %paths.config.display(), "config_written");

    let config_path = paths.config.display().to_string();

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Config written"),
            &[("path", serde_json::json!(config_path))],
        ),
        human => {
            if !cli.quiet {
                println!("Wrote default config to {}", config_path);
            }
        },
        records => {
            print_records_header("init", &[("config", config_path.as_str()), ("status", "ok")], &[]);
        }
    )
}
