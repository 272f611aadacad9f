//! Hand-maintained exclusion prefixes.

use shadowguard_core::constants::DEFAULT_MANUAL_EXCLUDES;

use super::pattern::{fqcn_to_path, pattern_prefix};

/// Static safety-net list, maintained outside auto-detection. Duplicates it
/// covers are "hard-excluded": handled even though no pattern is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualExclusions {
    patterns: Vec<String>,
}

impl ManualExclusions {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// The list shipped with the tool.
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_MANUAL_EXCLUDES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the first pattern whose prefix matches `path`.
    /// Patterns that reduce to an empty prefix never match.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .map(String::as_str)
            .find(|p| {
                let prefix = pattern_prefix(p);
                !prefix.is_empty() && path.starts_with(prefix)
            })
    }

    /// Returns true if the class's path form is covered by any pattern.
    pub fn covers(&self, fqcn: &str) -> bool {
        self.matching_pattern(&fqcn_to_path(fqcn)).is_some()
    }
}
