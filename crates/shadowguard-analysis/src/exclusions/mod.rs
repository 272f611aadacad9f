//! Exclusion patterns: the hand-maintained manual list, the generated
//! pattern file, and the archiver-side set that combines both.
//!
//! A pattern is a path prefix ending in `*`; an archive entry is excluded
//! when its path starts with the prefix.

pub mod manual;
pub mod pattern;
pub mod pattern_file;
pub mod set;

pub use manual::ManualExclusions;
pub use pattern::{exclusion_pattern, fqcn_to_path, pattern_prefix};
pub use pattern_file::{header_line, read_patterns, PatternFile};
pub use set::{ExclusionSet, ExclusionSource};
