//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORT_MAX_ENTRIES;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Kept entries listed before the report is truncated. Default: 200.
    pub max_entries: Option<usize>,
}

impl ReportConfig {
    pub fn effective_max_entries(&self) -> usize {
        self.max_entries.unwrap_or(DEFAULT_REPORT_MAX_ENTRIES)
    }
}
