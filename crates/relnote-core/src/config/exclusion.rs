//! Folder exclusion prefixes

/// Ordered list of path prefixes excluded from the similarity graph
///
/// Built from a multi-line setting: each line is trimmed and blank lines are
/// dropped, so an `ExclusionSet` never holds an empty prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    prefixes: Vec<String>,
}

impl ExclusionSet {
    /// Parse newline-separated prefixes
    pub fn parse(raw: &str) -> Self {
        let prefixes = raw
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        ExclusionSet { prefixes }
    }

    /// Whether `id` starts with any configured prefix
    pub fn is_excluded(&self, id: &str) -> bool {
        self.prefixes.iter().any(|prefix| id.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
