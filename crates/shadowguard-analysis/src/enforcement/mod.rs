//! Enforcement: partitions duplicates, builds the kept report, and decides
//! the outcome the caller should act on.

pub mod outcome;
pub mod partition;
pub mod report;

pub use outcome::Outcome;
pub use partition::{partition, Partition};
pub use report::{build_report, DuplicateReport, ReportContext};
