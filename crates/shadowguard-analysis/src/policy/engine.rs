//! Auto-exclusion decision.

use super::types::{ExclusionPolicy, Filter};
use crate::duplicates::DuplicateEntry;

/// Applies an `ExclusionPolicy` to duplicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEngine {
    policy: ExclusionPolicy,
}

impl PolicyEngine {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    /// `All` excludes every duplicate; `Stereotype` only those whose
    /// canonical copy is stereotype-classified.
    pub fn is_auto_excluded(&self, duplicate: &DuplicateEntry) -> bool {
        match self.policy.filter {
            Filter::All => true,
            Filter::Stereotype => duplicate.is_stereotype,
        }
    }
}
