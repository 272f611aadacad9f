//! Auto / hard / kept partition of duplicates.

use serde::{Deserialize, Serialize};

use crate::duplicates::DuplicateEntry;
use crate::exclusions::ManualExclusions;
use crate::policy::PolicyEngine;

/// Disjoint FQCN lists, each in the order of the input duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Excluded by a generated pattern.
    pub auto_excluded: Vec<String>,
    /// Not auto-excluded but covered by the manual list.
    pub hard_excluded: Vec<String>,
    /// Will still ship in the artifact.
    pub kept: Vec<String>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.auto_excluded.len() + self.hard_excluded.len() + self.kept.len()
    }

    pub fn is_kept(&self, fqcn: &str) -> bool {
        self.kept.iter().any(|k| k == fqcn)
    }
}

/// Place each duplicate in exactly one bucket. The manual list is consulted
/// only for duplicates the policy did not auto-exclude.
pub fn partition(
    duplicates: &[DuplicateEntry],
    engine: &PolicyEngine,
    manual: &ManualExclusions,
) -> Partition {
    let mut result = Partition::default();
    for duplicate in duplicates {
        let fqcn = duplicate.fqcn.clone();
        if engine.is_auto_excluded(duplicate) {
            result.auto_excluded.push(fqcn);
        } else if manual.covers(&duplicate.fqcn) {
            result.hard_excluded.push(fqcn);
        } else {
            result.kept.push(fqcn);
        }
    }
    result
}
