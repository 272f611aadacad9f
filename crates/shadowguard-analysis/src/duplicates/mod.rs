//! Duplicate detection across the canonical and legacy roots.

pub mod detector;
pub mod index;

pub use detector::{duplicate_fqcns, find_duplicates, DuplicateEntry};
pub use index::{ClassIndex, Collision};
