//! Relnote - related-note ranking for linked note vaults
//!
//! Reads a snapshot of resolved links and ranks the notes most related to a
//! given note by shared neighbors (Adamic–Adar), optionally adding direct
//! links and backlinks.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use relnote_core::error::{ExitCode as RelnoteExitCode, RelnoteError};
use relnote_core::format::OutputFormat;
use relnote_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(RelnoteExitCode::Success),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_with(e.exit_code())
        }
    }
}

/// Report a clap failure, as a JSON envelope when `--format json` was asked for
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !requests_json(env::args().skip(1)) {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::Io | ErrorKind::Format => RelnoteError::Other(err.to_string()),
        _ => RelnoteError::UsageError(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

/// Whether the raw arguments select JSON output; the last `--format` wins
fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut format = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            format = args.next();
        } else if let Some(value) = arg.strip_prefix("--format=") {
            format = Some(value.to_string());
        }
    }
    format.is_some_and(|f| f.eq_ignore_ascii_case("json"))
}

fn exit_with(code: RelnoteExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
