//! What the caller should do after a run.

use serde::{Deserialize, Serialize};

use crate::policy::OnDuplicate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Nothing to report: no kept duplicates, or the action is `none`.
    Clean,
    /// Kept duplicates under `warn`: log the report and continue.
    Warn,
    /// Kept duplicates under `fail`: abort the build with the report.
    Fail,
}

impl Outcome {
    pub fn decide(on_duplicate: OnDuplicate, kept: usize) -> Self {
        match (on_duplicate, kept) {
            (_, 0) | (OnDuplicate::None, _) => Outcome::Clean,
            (OnDuplicate::Warn, _) => Outcome::Warn,
            (OnDuplicate::Fail, _) => Outcome::Fail,
        }
    }
}
