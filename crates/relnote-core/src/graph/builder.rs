//! Undirected, exclusion-filtered view of a raw link graph

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use indexmap::{IndexMap, IndexSet};

use crate::config::ExclusionSet;
use crate::graph::types::RawLinkGraph;
use crate::trace_time;

/// Notes linked to or from the query in the unfiltered graph
pub type DirectConnections<'a> = BTreeSet<&'a str>;

/// Symmetrized adjacency with a degree table
///
/// Nodes and neighbor sets keep insertion order, which follows the raw
/// graph's source and target order.
///
/// Borrows identifiers from the [`RawLinkGraph`] it was built from and is
/// dropped at the end of the analysis that built it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredGraph<'a> {
    neighbors: IndexMap<&'a str, IndexSet<&'a str>>,
    degree: HashMap<&'a str, usize>,
}

impl<'a> FilteredGraph<'a> {
    /// Build the filtered graph and collect the query's direct connections.
    ///
    /// Direct connections ignore exclusion: an excluded note that links to or
    /// from `query` is still recorded there, while every excluded note is kept
    /// out of the adjacency.
    pub fn build(
        raw: &'a RawLinkGraph,
        query: &str,
        exclusions: &ExclusionSet,
    ) -> (Self, DirectConnections<'a>) {
        let start = Instant::now();
        let mut graph = FilteredGraph::default();
        let mut direct = DirectConnections::new();

        for (source, targets) in raw {
            let source = source.as_str();

            if source == query {
                direct.extend(targets.keys().map(String::as_str));
            }
            if targets.contains_key(query) {
                direct.insert(source);
            }

            if exclusions.is_excluded(source) {
                continue;
            }

            for target in targets.keys() {
                if exclusions.is_excluded(target) {
                    continue;
                }
                graph.add_edge(source, target.as_str());
            }
        }

        graph.degree = graph
            .neighbors
            .iter()
            .map(|(node, set)| (*node, set.len()))
            .collect();

        tracing::debug!(
            nodes = graph.node_count(),
            direct = direct.len(),
            excluded_prefixes = exclusions.prefixes().len(),
            "filtered_graph_built"
        );
        trace_time!(start, "build_filtered_graph");

        (graph, direct)
    }

    fn add_edge(&mut self, u: &'a str, v: &'a str) {
        self.neighbors.entry(u).or_default().insert(v);
        self.neighbors.entry(v).or_default().insert(u);
    }

    /// Neighbors of `node`, or `None` when it has no edge in the filtered graph
    pub fn neighbors(&self, node: &str) -> Option<&IndexSet<&'a str>> {
        self.neighbors.get(node)
    }

    /// Degree of `node`; zero for nodes absent from the graph
    pub fn degree(&self, node: &str) -> usize {
        self.degree.get(node).copied().unwrap_or(0)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.neighbors.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Iterate nodes with their neighbor sets in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&'a str, &IndexSet<&'a str>)> + '_ {
        self.neighbors.iter().map(|(node, set)| (*node, set))
    }
}
