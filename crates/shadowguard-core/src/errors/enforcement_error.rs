//! Enforcement errors.

use super::error_code::{self, ErrorCode};

/// Raised when the on-duplicate action is `fail` and duplicates remain in
/// the artifact. The message is the full duplicate report.
#[derive(Debug, thiserror::Error)]
pub enum EnforcementError {
    #[error("{report}")]
    UnresolvedDuplicates { kept: usize, report: String },
}

impl EnforcementError {
    /// Number of duplicates left unresolved.
    pub fn kept(&self) -> usize {
        match self {
            Self::UnresolvedDuplicates { kept, .. } => *kept,
        }
    }
}

impl ErrorCode for EnforcementError {
    fn error_code(&self) -> &'static str {
        error_code::UNRESOLVED_DUPLICATES
    }
}
