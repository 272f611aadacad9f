//! Archiver-side exclusion matching.
//!
//! The packaging step applies two independent pattern sets: the generated
//! file and the manual list. Neither overrides the other; an entry is
//! excluded if either matches.

use std::path::Path;

use shadowguard_core::errors::OutputError;

use super::manual::ManualExclusions;
use super::pattern::pattern_prefix;
use super::pattern_file::read_patterns;

/// Which set excluded an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionSource {
    Generated,
    Manual,
}

#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    generated: Vec<String>,
    manual: ManualExclusions,
}

impl ExclusionSet {
    pub fn new(generated: Vec<String>, manual: ManualExclusions) -> Self {
        Self { generated, manual }
    }

    /// Load the generated file (missing means empty) alongside `manual`.
    pub fn load(generated_file: &Path, manual: ManualExclusions) -> Result<Self, OutputError> {
        let generated = read_patterns(generated_file)?;
        tracing::debug!(
            path = %generated_file.display(),
            generated = generated.len(),
            manual = manual.patterns().len(),
            "loaded exclusion set"
        );
        Ok(Self::new(generated, manual))
    }

    /// Which set, if any, excludes the archive entry at `entry`.
    /// Generated patterns are checked first.
    pub fn source_for(&self, entry: &str) -> Option<ExclusionSource> {
        let generated_hit = self.generated.iter().any(|p| {
            let prefix = pattern_prefix(p);
            !prefix.is_empty() && entry.starts_with(prefix)
        });
        if generated_hit {
            Some(ExclusionSource::Generated)
        } else if self.manual.matching_pattern(entry).is_some() {
            Some(ExclusionSource::Manual)
        } else {
            None
        }
    }

    pub fn is_excluded(&self, entry: &str) -> bool {
        self.source_for(entry).is_some()
    }
}
