//! Policy axes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which duplicates are auto-excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Only duplicates whose canonical copy is a framework stereotype.
    #[default]
    Stereotype,
    /// Every duplicate.
    All,
}

/// What to do when duplicates remain in the artifact after exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnDuplicate {
    #[default]
    None,
    Warn,
    Fail,
}

/// The resolved policy for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    pub filter: Filter,
    pub on_duplicate: OnDuplicate,
}

impl ExclusionPolicy {
    pub const fn new(filter: Filter, on_duplicate: OnDuplicate) -> Self {
        Self {
            filter,
            on_duplicate,
        }
    }
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::Stereotype => "stereotype",
            Filter::All => "all",
        }
    }
}

impl OnDuplicate {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnDuplicate::None => "none",
            OnDuplicate::Warn => "warn",
            OnDuplicate::Fail => "fail",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OnDuplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExclusionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filter={}, onDup={}", self.filter, self.on_duplicate)
    }
}
