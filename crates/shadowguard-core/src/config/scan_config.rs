//! Scan configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLEAN_ROOT, DEFAULT_EXTENSION, DEFAULT_MAIN_ROOT};

/// Configuration for the two competing source roots.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Canonical source root. Default: `main/java`.
    pub main_root: Option<PathBuf>,
    /// Legacy/adapter source root. Default: `app/src/main/java_clean`.
    pub clean_root: Option<PathBuf>,
    /// File extension to scan, without the dot. Default: `java`.
    pub extension: Option<String>,
}

impl ScanConfig {
    /// Returns the canonical root resolved against `project_dir`.
    pub fn effective_main_root(&self, project_dir: &Path) -> PathBuf {
        let root = self
            .main_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAIN_ROOT));
        super::resolve_against(project_dir, &root)
    }

    /// Returns the legacy root resolved against `project_dir`.
    pub fn effective_clean_root(&self, project_dir: &Path) -> PathBuf {
        let root = self
            .clean_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CLEAN_ROOT));
        super::resolve_against(project_dir, &root)
    }

    /// Returns the effective extension, defaulting to `java`.
    pub fn effective_extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }
}
