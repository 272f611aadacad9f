//! Manual exclusion list configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MANUAL_EXCLUDES;

/// Configuration for the hand-maintained exclusion prefixes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExclusionConfig {
    /// Replaces the built-in manual list when set.
    pub manual: Option<Vec<String>>,
}

impl ExclusionConfig {
    /// Returns the configured manual list, or the built-in one.
    pub fn effective_manual(&self) -> Vec<String> {
        match &self.manual {
            Some(list) => list.clone(),
            None => DEFAULT_MANUAL_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
