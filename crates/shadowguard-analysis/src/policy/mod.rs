//! Policy engine: parses the mode string into two independent axes and
//! decides which duplicates are auto-excluded.

pub mod engine;
pub mod parser;
pub mod types;

pub use engine::PolicyEngine;
pub use parser::{mode_label, parse_policy};
pub use types::{ExclusionPolicy, Filter, OnDuplicate};
