//! ErrorCode trait for stable, machine-readable error tags.

/// Every error enum implements this so callers (CLI, build wrappers) can
/// branch on a stable code instead of parsing messages.
pub trait ErrorCode {
    /// Returns the code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged form: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const UNRESOLVED_DUPLICATES: &str = "UNRESOLVED_DUPLICATES";
