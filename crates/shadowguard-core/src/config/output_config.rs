//! Output configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_PATH;

/// Where the generated pattern file is written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Pattern file path. Default: `build/generated/dup-fqcn-excludes.txt`.
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    /// Returns the output path resolved against `project_dir`.
    pub fn effective_path(&self, project_dir: &Path) -> PathBuf {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
        super::resolve_against(project_dir, &path)
    }
}
