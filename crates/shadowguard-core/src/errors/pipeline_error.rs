//! Pipeline errors.

use super::error_code::ErrorCode;
use super::{ConfigError, EnforcementError, OutputError, ScanError};

/// Errors that can occur during a resolver run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("{0}")]
    Enforcement(#[from] EnforcementError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
            Self::Enforcement(e) => e.error_code(),
        }
    }
}
