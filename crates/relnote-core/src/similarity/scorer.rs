//! Adamic–Adar scoring over a filtered graph

use std::collections::BTreeMap;
use std::time::Instant;

use crate::graph::FilteredGraph;
use crate::similarity::AnalysisResult;
use crate::trace_time;

/// Contribution of a shared neighbor with the given degree
///
/// `1 / ln(degree)`, defined as zero for degree 0 or 1 so the logarithm can
/// never produce a division by zero.
pub fn adamic_adar_weight(degree: usize) -> f64 {
    if degree > 1 {
        1.0 / (degree as f64).ln()
    } else {
        0.0
    }
}

struct Candidate<'a> {
    score: f64,
    common: Vec<&'a str>,
}

/// Score every node sharing at least one neighbor with `query`.
///
/// Only nodes with a positive score are returned; the query itself never is.
/// Candidates are reached through the query's neighbors, which visits the
/// same pairs as a full intersection scan but skips nodes that cannot share
/// a neighbor. Shared neighbors are recorded in the query's neighbor order.
pub fn score(graph: &FilteredGraph<'_>, query: &str) -> Vec<AnalysisResult> {
    let start = Instant::now();

    let Some(query_neighbors) = graph.neighbors(query) else {
        tracing::debug!(query, "query_not_in_filtered_graph");
        return Vec::new();
    };

    let mut candidates: BTreeMap<&str, Candidate<'_>> = BTreeMap::new();

    for &shared in query_neighbors {
        let weight = adamic_adar_weight(graph.degree(shared));
        let Some(second_hop) = graph.neighbors(shared) else {
            continue;
        };

        for &target in second_hop {
            if target == query {
                continue;
            }
            let entry = candidates.entry(target).or_insert_with(|| Candidate {
                score: 0.0,
                common: Vec::new(),
            });
            entry.score += weight;
            entry.common.push(shared);
        }
    }

    let visited = candidates.len();
    let results: Vec<AnalysisResult> = candidates
        .into_iter()
        .filter(|(_, candidate)| candidate.score > 0.0)
        .map(|(path, candidate)| AnalysisResult {
            path: path.to_string(),
            score: candidate.score,
            common_neighbors: candidate.common.into_iter().map(str::to_string).collect(),
        })
        .collect();

    tracing::debug!(
        query,
        neighbors = query_neighbors.len(),
        candidates = visited,
        scored = results.len(),
        "adamic_adar_scored"
    );
    trace_time!(start, "adamic_adar_score");

    results
}
