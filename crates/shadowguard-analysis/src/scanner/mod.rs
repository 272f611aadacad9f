//! Scanner subsystem: walks one source root and lists its source files.
//!
//! A root that does not exist is a normal condition (an optional module),
//! so it yields an empty file list rather than an error.

pub mod types;
pub mod walker;

pub use types::SourceRoot;
pub use walker::{read_source, scan_root};
