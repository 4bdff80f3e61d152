//! CLI argument parsing for relnote
//!
//! Global flags: --root, --links, --config, --format, --quiet, --verbose

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::RelatedArgs;
use parse::parse_format;
pub use relnote_core::format::OutputFormat;

/// Relnote - rank related notes by shared links
#[derive(Parser, Debug)]
#[command(name = "relnote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root containing the .relnote directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Link snapshot file (default: <root>/.relnote/links.json)
    #[arg(long, global = true, env = "RELNOTE_LINKS")]
    pub links: Option<PathBuf>,

    /// Config file (default: <root>/.relnote/config.toml)
    #[arg(long, global = true, env = "RELNOTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, relnote_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Rank notes related to a note
    Related(RelatedArgs),

    /// Resolve link text to a note path
    Resolve {
        /// Link text or note path
        name: String,

        /// Note the link appears in (prefers matches in its folder)
        #[arg(long)]
        from: Option<String>,
    },

    /// Show the effective configuration
    Config,
}
