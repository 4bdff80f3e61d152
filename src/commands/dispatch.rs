//! Command dispatch logic for relnote
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use relnote_core::config::{RelnoteConfig, CONFIG_FILE, RELNOTE_DIR};
use relnote_core::error::Result;
use relnote_core::snapshot::LINKS_FILE;
use relnote_core::trace_time;

/// Files a command reads, resolved against the vault root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPaths {
    pub root: PathBuf,
    pub links: PathBuf,
    pub config: PathBuf,
}

impl VaultPaths {
    /// Resolve paths from global flags; relative overrides are taken from `root`
    pub fn resolve(root: &Path, links: Option<&Path>, config: Option<&Path>) -> Self {
        let relnote_dir = root.join(RELNOTE_DIR);
        let anchor = |path: &Path| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            }
        };

        VaultPaths {
            root: root.to_path_buf(),
            links: links
                .map(anchor)
                .unwrap_or_else(|| relnote_dir.join(LINKS_FILE)),
            config: config
                .map(anchor)
                .unwrap_or_else(|| relnote_dir.join(CONFIG_FILE)),
        }
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load_config(&self) -> Result<RelnoteConfig> {
        RelnoteConfig::load_or_default(&self.config)
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let paths = VaultPaths::resolve(&root, cli.links.as_deref(), cli.config.as_deref());
    trace_time!(start, "resolve_paths");
    tracing::debug!(
        root = %paths.root.display(),
        links = %paths.links.display(),
        config = %paths.config.display(),
        "paths_resolved"
    );

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Init { force }) => commands::init::execute(cli, &paths, *force),

        Some(Commands::Related(args)) => commands::related::execute(cli, &paths, args),

        Some(Commands::Resolve { name, from }) => {
            commands::resolve::execute(cli, &paths, name, from.as_deref())
        }

        Some(Commands::Config) => commands::config::execute(cli, &paths),
    }
}

fn handle_no_command() -> Result<()> {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    cmd.print_help()?;
    println!();
    Ok(())
}
