//! Policy configuration.

use serde::{Deserialize, Serialize};

/// Raw policy mode string. Parsing happens in the analysis crate so the
/// config layer never interprets tokens.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PolicyConfig {
    /// Free-form mode, e.g. `stereotype:fail`. Absent means the default policy.
    pub mode: Option<String>,
}
