//! `relnote resolve` command - resolve link text to a note path

use crate::cli::Cli;
use crate::commands::dispatch::VaultPaths;
use crate::commands::format::{output_by_format_result, print_records_header};
use relnote_core::error::{RelnoteError, Result};
use relnote_core::format::escape_quotes;
use relnote_core::graph::LinkGraphProvider;
use relnote_core::snapshot::VaultSnapshot;

/// Execute the resolve command
pub fn execute(cli: &Cli, paths: &VaultPaths, name: &str, from: Option<&str>) -> Result<()> {
    let snapshot = VaultSnapshot::load(&paths.links)?;
    let context = from.unwrap_or("");

    let resolved =
        snapshot
            .first_match_by_name(name, context)
            .ok_or_else(|| RelnoteError::NoteNotFound {
                id: name.to_string(),
            })?;

    tracing::debug!(name, context, resolved = %resolved, "link_resolved");

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "name": name,
                "from": from,
                "path": resolved,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), RelnoteError>(())
        },
        human => {
            println!("{}", resolved);
        },
        records => {
            print_records_header("resolve", &[("name", name)], &[]);
            println!("N \"{}\"", escape_quotes(&resolved));
        }
    )
}
