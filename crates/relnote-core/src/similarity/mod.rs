//! Related-note engine based on the Adamic–Adar index
//!
//! Every call rebuilds its graph from the snapshot it is given:
//! raw links → [`FilteredGraph`] → per-node scores → merged, ordered results.

mod assembler;
mod scorer;

pub use assembler::{assemble, compare_results, sort_results};
pub use scorer::{adamic_adar_weight, score};

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::graph::{FilteredGraph, LinkGraphProvider, RawLinkGraph};
use crate::trace_time;

/// A note related to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Note identifier
    pub path: String,
    /// Adamic–Adar score; exactly 0.0 for results added as direct links
    pub score: f64,
    /// Neighbors shared with the query, in the query's neighbor order
    pub common_neighbors: Vec<String>,
}

impl AnalysisResult {
    /// Zero-score result for a note linked directly to or from the query
    pub fn direct_link(path: impl Into<String>) -> Self {
        AnalysisResult {
            path: path.into(),
            score: 0.0,
            common_neighbors: Vec::new(),
        }
    }

    /// Whether this result was added only because of a direct link
    pub fn is_direct_link_only(&self) -> bool {
        self.score == 0.0 && self.common_neighbors.is_empty()
    }
}

/// Rank every note related to `query` in `raw`.
///
/// Returns the complete ordered list; callers apply their own display limits.
/// Never fails: an empty graph or an isolated/excluded query yields an empty
/// or direct-links-only list.
pub fn calculate(raw: &RawLinkGraph, query: &str, config: &AnalysisConfig) -> Vec<AnalysisResult> {
    let start = Instant::now();
    let exclusions = config.exclusions();

    let (graph, direct) = FilteredGraph::build(raw, query, &exclusions);
    let scored = score(&graph, query);
    let results = assemble(scored, &direct, raw, query, config);

    tracing::debug!(
        query,
        sources = raw.len(),
        edges = raw.edge_count(),
        results = results.len(),
        "related_notes_calculated"
    );
    trace_time!(start, "calculate", results = results.len());

    results
}

/// Engine bound to a link provider
pub struct SimilarityEngine<'a> {
    provider: &'a dyn LinkGraphProvider,
}

impl<'a> SimilarityEngine<'a> {
    /// Create a new engine over `provider`
    pub fn new(provider: &'a dyn LinkGraphProvider) -> Self {
        SimilarityEngine { provider }
    }

    /// Rank notes related to `query` using the provider's current links
    pub fn calculate(&self, query: &str, config: &AnalysisConfig) -> Vec<AnalysisResult> {
        calculate(self.provider.resolved_links(), query, config)
    }

    /// Resolve link text, then rank notes related to the resolved note.
    ///
    /// Falls back to the raw text when the provider cannot resolve it.
    pub fn calculate_for_name(
        &self,
        name: &str,
        context: &str,
        config: &AnalysisConfig,
    ) -> (String, Vec<AnalysisResult>) {
        let query = self
            .provider
            .first_match_by_name(name, context)
            .unwrap_or_else(|| name.to_string());
        let results = self.calculate(&query, config);
        (query, results)
    }
}
