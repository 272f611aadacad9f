//! Configuration system for shadowguard.
//! TOML-based, 4-layer resolution: CLI > env > project > defaults.

pub mod exclusion_config;
pub mod output_config;
pub mod policy_config;
pub mod report_config;
pub mod scan_config;
pub mod shadowguard_config;

pub use exclusion_config::ExclusionConfig;
pub use output_config::OutputConfig;
pub use policy_config::PolicyConfig;
pub use report_config::ReportConfig;
pub use scan_config::ScanConfig;
pub use shadowguard_config::{CliOverrides, ShadowguardConfig};

use std::path::{Path, PathBuf};

/// Resolve a configured path against the project directory.
/// Absolute paths are returned unchanged.
pub(crate) fn resolve_against(project_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}
