//! `relnote related` command - rank notes related to a note
//!
//! - resolves the note through the snapshot (exact, `.md`, or trailing path)
//! - builds a fresh analysis config from the config file plus flags
//! - prints the top results; `--all` prints the complete ranking

use std::time::Instant;

use crate::cli::{Cli, RelatedArgs};
use crate::commands::dispatch::VaultPaths;
use crate::commands::format::{output_by_format_result, print_records_header};
use relnote_core::bail_usage;
use relnote_core::config::{AnalysisConfig, RelnoteConfig};
use relnote_core::error::{RelnoteError, Result};
use relnote_core::format::{display_name, escape_quotes, score_bar_percent};
use relnote_core::similarity::{AnalysisResult, SimilarityEngine};
use relnote_core::snapshot::VaultSnapshot;
use relnote_core::trace_time;

/// Number of cells in the human score bar
const BAR_CELLS: usize = 10;

/// Execute the related command
pub fn execute(cli: &Cli, paths: &VaultPaths, args: &RelatedArgs) -> Result<()> {
    let start = Instant::now();

    if args.note.trim().is_empty() {
        bail_usage!("note must not be empty");
    }

    let config = paths.load_config()?;
    let analysis = analysis_config(&config, args);
    let limit = display_limit(&config, args);
    let show_folders = args.show_folders || config.display.show_folder_names;

    let snapshot = VaultSnapshot::load(&paths.links)?;
    trace_time!(start, "load_inputs");

    let engine = SimilarityEngine::new(&snapshot);
    let context = args.from.as_deref().unwrap_or("");
    let (query, results) = engine.calculate_for_name(&args.note, context, &analysis);

    if !snapshot.contains(&query) {
        tracing::warn!(note = %args.note, "note not present in link snapshot");
    }
    trace_time!(start, "related", results = results.len());

    let shown = &results[..limit.map_or(results.len(), |n| n.min(results.len()))];

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "note": query,
                "total": results.len(),
                "results": shown
                    .iter()
                    .map(|r| result_json(r, show_folders))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), RelnoteError>(())
        },
        human => {
            print_human(cli, &query, &results, shown, show_folders);
        },
        records => {
            print_records_header(
                "related",
                &[("note", query.as_str())],
                &[("results", results.len()), ("shown", shown.len())],
            );
            for result in shown {
                println!("{}", result_record(result));
            }
        }
    )
}

/// Fresh per-call analysis settings: file values overridden by flags
fn analysis_config(config: &RelnoteConfig, args: &RelatedArgs) -> AnalysisConfig {
    let mut analysis = config.analysis.clone();
    for prefix in &args.exclude {
        analysis.add_excluded_folder(prefix);
    }
    if args.no_backlinks {
        analysis.include_backlink_direct_links = false;
    }
    if args.no_outgoing {
        analysis.include_outgoing_direct_links = false;
    }
    analysis
}

/// `None` means every result is shown
fn display_limit(config: &RelnoteConfig, args: &RelatedArgs) -> Option<usize> {
    if args.all {
        None
    } else {
        Some(args.limit.unwrap_or(config.display.limit))
    }
}

fn result_json(result: &AnalysisResult, show_folders: bool) -> serde_json::Value {
    serde_json::json!({
        "path": result.path,
        "name": display_name(&result.path, show_folders),
        "score": result.score,
        "common_neighbors": result.common_neighbors,
    })
}

fn result_record(result: &AnalysisResult) -> String {
    let common = if result.common_neighbors.is_empty() {
        "-".to_string()
    } else {
        result.common_neighbors.join(",")
    };
    format!(
        "N \"{}\" score={:.4} common=\"{}\"",
        escape_quotes(&result.path),
        result.score,
        escape_quotes(&common)
    )
}

fn score_bar(score: f64) -> String {
    let filled = (score_bar_percent(score) as usize * BAR_CELLS + 50) / 100;
    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_CELLS - filled))
}

fn print_human(
    cli: &Cli,
    query: &str,
    results: &[AnalysisResult],
    shown: &[AnalysisResult],
    show_folders: bool,
) {
    if results.is_empty() {
        if !cli.quiet {
            println!("No related notes found.");
        }
        return;
    }

    if !cli.quiet {
        println!("Related to {}:", display_name(query, show_folders));
    }

    for result in shown {
        println!(
            "{:>7.2} [{}] {}",
            result.score,
            score_bar(result.score),
            display_name(&result.path, show_folders)
        );
        if !result.common_neighbors.is_empty() {
            let via: Vec<String> = result
                .common_neighbors
                .iter()
                .map(|n| display_name(n, show_folders))
                .collect();
            println!("          via: {}", via.join(", "));
        }
    }

    let hidden = results.len() - shown.len();
    if hidden > 0 && !cli.quiet {
        println!("... {} more (use --all to show every result)", hidden);
    }
}
