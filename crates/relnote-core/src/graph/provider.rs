use super::types::RawLinkGraph;

/// Source of link data for an analysis
///
/// The host document store owns the links; the engine only borrows a
/// snapshot for the duration of one call.
pub trait LinkGraphProvider {
    /// Current resolved links, read-only
    fn resolved_links(&self) -> &RawLinkGraph;

    /// Resolve link text to a note identifier, relative to `context`
    ///
    /// Used for navigation by callers; scoring never needs it.
    fn first_match_by_name(&self, name: &str, context: &str) -> Option<String>;
}

impl LinkGraphProvider for RawLinkGraph {
    fn resolved_links(&self) -> &RawLinkGraph {
        self
    }

    fn first_match_by_name(&self, name: &str, _context: &str) -> Option<String> {
        let known = |id: &str| {
            self.targets(id).is_some() || self.iter().any(|(_, targets)| targets.contains_key(id))
        };
        if known(name) {
            return Some(name.to_string());
        }
        let with_ext = format!("{}.md", name);
        known(&with_ext).then_some(with_ext)
    }
}
