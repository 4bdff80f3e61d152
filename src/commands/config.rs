//! `relnote config` command - show the effective configuration

use crate::cli::Cli;
use crate::commands::dispatch::VaultPaths;
use crate::commands::format::{output_by_format_result, print_records_header};
use relnote_core::error::{RelnoteError, Result};

/// Execute the config command
pub fn execute(cli: &Cli, paths: &VaultPaths) -> Result<()> {
    let config = paths.load_config()?;
    let source = if paths.config.exists() {
        paths.config.display().to_string()
    } else {
        "defaults".to_string()
    };

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok::<(), RelnoteError>(())
        },
        human => {
            if !cli.quiet {
                println!("# source: {}", source);
            }
            print!("{}", toml::to_string_pretty(&config)?);
        },
        records => {
            let exclusions = config.analysis.exclusions();
            print_records_header("config", &[("source", source.as_str())], &[]);
            for prefix in exclusions.prefixes() {
                println!("X \"{}\"", relnote_core::format::escape_quotes(prefix));
            }
            println!(
                "O include_outgoing_direct_links={} include_backlink_direct_links={}",
                config.analysis.include_outgoing_direct_links,
                config.analysis.include_backlink_direct_links
            );
            println!(
                "O show_folder_names={} limit={}",
                config.display.show_folder_names, config.display.limit
            );
        }
    )
}
