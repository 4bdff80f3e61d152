use indexmap::{map, IndexMap};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker for a resolved link between two notes
///
/// Hosts attach link counts or other metadata to each edge; only the
/// presence of the edge matters here, so any JSON value deserializes into
/// this marker and it serializes back as `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LinkPresence;

impl Serialize for LinkPresence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(1)
    }
}

impl<'de> Deserialize<'de> for LinkPresence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(LinkPresence)
    }
}

/// Outgoing links of one source note
pub type LinkTargets = IndexMap<String, LinkPresence>;

/// Directed link graph as reported by the host: source → targets
///
/// Sources and targets keep the order they were first seen in, so every
/// traversal follows the snapshot's key order. The JSON form is the host's
/// resolved-links object, e.g. `{"a.md": {"b.md": 2}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawLinkGraph {
    links: IndexMap<String, LinkTargets>,
}

impl RawLinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(source, target)` pairs
    pub fn from_links<I, S, T>(links: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut graph = Self::new();
        for (source, target) in links {
            graph.add_link(source, target);
        }
        graph
    }

    /// Record a directed link. Repeated links collapse into one.
    pub fn add_link(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.links
            .entry(source.into())
            .or_default()
            .insert(target.into(), LinkPresence);
    }

    /// Register a source note that has no outgoing links
    pub fn add_source(&mut self, source: impl Into<String>) {
        self.links.entry(source.into()).or_default();
    }

    /// Outgoing links of `source`, if it is a known source
    pub fn targets(&self, source: &str) -> Option<&LinkTargets> {
        self.links.get(source)
    }

    /// Whether `source` links directly to `target`
    pub fn has_link(&self, source: &str, target: &str) -> bool {
        self.links
            .get(source)
            .is_some_and(|targets| targets.contains_key(target))
    }

    pub fn iter(&self) -> map::Iter<'_, String, LinkTargets> {
        self.links.iter()
    }

    /// Number of source notes
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of directed links
    pub fn edge_count(&self) -> usize {
        self.links.values().map(IndexMap::len).sum()
    }
}

impl<'a> IntoIterator for &'a RawLinkGraph {
    type Item = (&'a String, &'a LinkTargets);
    type IntoIter = map::Iter<'a, String, LinkTargets>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
