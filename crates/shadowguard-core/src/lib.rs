//! shadowguard-core: shared foundation for the duplicate-class resolver.
//!
//! - `errors`: one `thiserror` enum per subsystem plus the pipeline aggregate
//! - `config`: TOML configuration with CLI > env > project > defaults resolution
//! - `tracing`: subscriber setup driven by `SHADOWGUARD_LOG`
//! - `constants`: compiled defaults and the built-in manual exclusion list

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
