//! Link snapshots stored as JSON
//!
//! A snapshot is the host's resolved-links object written to disk, e.g.
//! `.relnote/links.json`. It backs [`LinkGraphProvider`] for the CLI.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RelnoteError, Result};
use crate::graph::{LinkGraphProvider, RawLinkGraph};

/// Default snapshot file name inside the relnote directory
pub const LINKS_FILE: &str = "links.json";

/// Markdown extension appended when resolving bare link text
const NOTE_EXTENSION: &str = ".md";

/// Read-only link snapshot with name resolution
#[derive(Debug, Clone, Default)]
pub struct VaultSnapshot {
    links: RawLinkGraph,
    notes: BTreeSet<String>,
    path: Option<PathBuf>,
}

impl VaultSnapshot {
    /// Wrap an in-memory link graph
    pub fn new(links: RawLinkGraph) -> Self {
        let notes = collect_notes(&links);
        VaultSnapshot {
            links,
            notes,
            path: None,
        }
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RelnoteError::SnapshotNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)
            .map_err(|e| RelnoteError::io_operation("read", path.display(), e))?;
        let links: RawLinkGraph =
            serde_json::from_str(&content).map_err(|e| RelnoteError::InvalidSnapshot {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            sources = links.len(),
            edges = links.edge_count(),
            "snapshot_loaded"
        );

        let mut snapshot = Self::new(links);
        snapshot.path = Some(path.to_path_buf());
        Ok(snapshot)
    }

    /// File the snapshot was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Every note that appears as a link source or target
    pub fn notes(&self) -> &BTreeSet<String> {
        &self.notes
    }

    pub fn contains(&self, id: &str) -> bool {
        self.notes.contains(id)
    }
}

fn collect_notes(links: &RawLinkGraph) -> BTreeSet<String> {
    let mut notes = BTreeSet::new();
    for (source, targets) in links {
        notes.insert(source.clone());
        notes.extend(targets.keys().cloned());
    }
    notes
}

fn folder_of(id: &str) -> &str {
    id.rsplit_once('/').map(|(folder, _)| folder).unwrap_or("")
}

impl LinkGraphProvider for VaultSnapshot {
    fn resolved_links(&self) -> &RawLinkGraph {
        &self.links
    }

    /// Resolve link text the way editors resolve wiki links.
    ///
    /// Exact identifier first, then with `.md` appended, then any note whose
    /// trailing path segments match. Among those, a note in `context`'s
    /// folder wins, then the shortest path, then the smallest identifier.
    fn first_match_by_name(&self, name: &str, context: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if self.contains(name) {
            return Some(name.to_string());
        }

        let with_ext = format!("{}{}", name, NOTE_EXTENSION);
        if self.contains(&with_ext) {
            return Some(with_ext);
        }

        let suffix = strip_extension(name).trim_start_matches('/');
        if suffix.is_empty() {
            return None;
        }
        let nested = format!("/{}", suffix);
        let context_folder = folder_of(context);

        self.notes
            .iter()
            .filter(|id| {
                let stem = strip_extension(id);
                stem == suffix || stem.ends_with(&nested)
            })
            .min_by(|a, b| {
                let a_elsewhere = folder_of(a) != context_folder;
                let b_elsewhere = folder_of(b) != context_folder;
                a_elsewhere
                    .cmp(&b_elsewhere)
                    .then_with(|| a.len().cmp(&b.len()))
                    .then_with(|| a.cmp(b))
            })
            .cloned()
    }
}

fn strip_extension(id: &str) -> &str {
    id.strip_suffix(NOTE_EXTENSION).unwrap_or(id)
}
