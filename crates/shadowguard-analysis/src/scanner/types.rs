//! Scanner data types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One of the two competing source trees, with its extension filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRoot {
    pub path: PathBuf,
    /// Extension without the dot, matched exactly against the last extension.
    pub extension: String,
}

impl SourceRoot {
    pub fn new(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Returns true if the root is an existing directory.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Returns true if `path` carries this root's extension.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}
