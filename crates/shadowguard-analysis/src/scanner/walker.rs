//! Recursive source root walker.

use std::fs;
use std::path::{Path, PathBuf};

use shadowguard_core::errors::ScanError;
use walkdir::WalkDir;

use super::types::SourceRoot;

/// List every regular file under `root` that carries the root's extension.
///
/// Paths are returned in lexicographic order so downstream maps are built
/// deterministically. A missing root yields an empty list.
pub fn scan_root(root: &SourceRoot) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        tracing::info!(
            root = %root.path.display(),
            "source root missing, nothing to scan"
        );
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root.path).sort_by_file_name() {
        let entry = entry.map_err(|e| ScanError::Walk {
            root: root.path.clone(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if path.is_file() && root.accepts(path) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    tracing::debug!(
        root = %root.path.display(),
        files = files.len(),
        "scanned source root"
    );
    Ok(files)
}

/// Read a source file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_source(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
