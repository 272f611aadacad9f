//! Error handling for shadowguard.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod enforcement_error;
pub mod error_code;
pub mod output_error;
pub mod pipeline_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use enforcement_error::EnforcementError;
pub use error_code::ErrorCode;
pub use output_error::OutputError;
pub use pipeline_error::PipelineError;
pub use scan_error::ScanError;
