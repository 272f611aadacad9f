//! shadowguard-analysis: duplicate-class conflict resolution.
//!
//! Scans a canonical and a legacy source root, finds classes sharing a
//! fully-qualified name, and decides which duplicates must be excluded from
//! the shipped artifact so the legacy copy cannot shadow the canonical one.
//!
//! - `scanner`: source root walking
//! - `extract`: package declaration and FQCN extraction
//! - `duplicates`: per-root class indexes and their intersection
//! - `classify`: framework stereotype detection
//! - `policy`: mode string parsing and the auto-exclusion decision
//! - `exclusions`: manual prefixes, pattern file, archiver-side matching
//! - `enforcement`: partitioning, reporting, outcomes
//! - `pipeline`: the end-to-end resolver

pub mod classify;
pub mod duplicates;
pub mod enforcement;
pub mod exclusions;
pub mod extract;
pub mod pipeline;
pub mod policy;
pub mod scanner;

pub use duplicates::{ClassIndex, Collision, DuplicateEntry};
pub use enforcement::{DuplicateReport, Outcome, Partition};
pub use exclusions::{ExclusionSet, ManualExclusions, PatternFile};
pub use pipeline::{Resolution, Resolver, ResolverOptions};
pub use policy::{ExclusionPolicy, Filter, OnDuplicate, PolicyEngine};
pub use scanner::SourceRoot;
