//! FQCN extraction from source text.
//!
//! This is a line-anchored regex heuristic, not a parse. Comments and string
//! literals are not stripped, so a line that starts with `package x;` inside
//! a block comment is taken as the declaration.

pub mod fqcn;

pub use fqcn::{class_name, declared_package, fqcn_of, ClassRecord};
