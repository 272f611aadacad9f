//! Stereotype classification of canonical class copies.

pub mod stereotype;

pub use stereotype::{is_stereotype, matched_annotation, BOOT_ANNOTATIONS, STEREOTYPE_ANNOTATIONS};
