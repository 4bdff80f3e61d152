//! Direct-link augmentation and final ordering

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::config::AnalysisConfig;
use crate::graph::{DirectConnections, RawLinkGraph};
use crate::similarity::AnalysisResult;

/// Merge scored results with zero-score direct links and sort them.
///
/// A direct connection not already scored is added when it is an outgoing
/// link of `query` and outgoing links are enabled, or a backlink and
/// backlinks are enabled. Direction is read from the unfiltered graph.
pub fn assemble(
    mut results: Vec<AnalysisResult>,
    direct: &DirectConnections<'_>,
    raw: &RawLinkGraph,
    query: &str,
    config: &AnalysisConfig,
) -> Vec<AnalysisResult> {
    if config.includes_direct_links() {
        let scored: HashSet<String> = results.iter().map(|r| r.path.clone()).collect();
        let before = results.len();

        for &candidate in direct {
            if candidate == query || scored.contains(candidate) {
                continue;
            }

            let outgoing = raw.has_link(query, candidate);
            let incoming = raw.has_link(candidate, query);

            if (outgoing && config.include_outgoing_direct_links)
                || (incoming && config.include_backlink_direct_links)
            {
                results.push(AnalysisResult::direct_link(candidate));
            }
        }

        tracing::debug!(
            query,
            direct = direct.len(),
            added = results.len() - before,
            "direct_links_merged"
        );
    }

    sort_results(&mut results);
    results
}

/// Order results by score descending, then by path descending (Z to A)
pub fn sort_results(results: &mut [AnalysisResult]) {
    results.sort_by(compare_results);
}

/// Total order used for result lists
pub fn compare_results(a: &AnalysisResult, b: &AnalysisResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.path.cmp(&a.path))
}
