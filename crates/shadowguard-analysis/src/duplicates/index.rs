//! Per-root `fqcn → file` index.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use shadowguard_core::errors::ScanError;

use crate::extract::ClassRecord;
use crate::scanner::{read_source, scan_root, SourceRoot};

/// Two or more files in one root that yield the same FQCN.
///
/// Files are visited in lexicographic path order; `kept` is the first one
/// and `shadowed` lists the rest in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub fqcn: String,
    pub kept: PathBuf,
    pub shadowed: Vec<PathBuf>,
}

/// All classes found under one source root.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    by_fqcn: FxHashMap<String, PathBuf>,
    collisions: Vec<Collision>,
}

impl ClassIndex {
    /// Scan `root` and index every matching file by FQCN.
    pub fn build(root: &SourceRoot) -> Result<Self, ScanError> {
        let mut records = Vec::new();
        for file in scan_root(root)? {
            let content = read_source(&file)?;
            records.push(ClassRecord::new(&content, file));
        }
        Ok(Self::from_records(&root.path, records))
    }

    /// Index pre-extracted records. Records are re-sorted by file path so the
    /// first path for a duplicated FQCN wins regardless of input order.
    pub fn from_records(root: &Path, mut records: Vec<ClassRecord>) -> Self {
        records.sort_by(|a, b| a.file.cmp(&b.file));

        let mut by_fqcn: FxHashMap<String, PathBuf> = FxHashMap::default();
        let mut shadowed: FxHashMap<String, Vec<PathBuf>> = FxHashMap::default();
        for record in records {
            if by_fqcn.contains_key(&record.fqcn) {
                shadowed.entry(record.fqcn).or_default().push(record.file);
            } else {
                by_fqcn.insert(record.fqcn, record.file);
            }
        }

        let mut collisions: Vec<Collision> = shadowed
            .into_iter()
            .map(|(fqcn, shadowed)| Collision {
                kept: by_fqcn[&fqcn].clone(),
                fqcn,
                shadowed,
            })
            .collect();
        collisions.sort_by(|a, b| a.fqcn.cmp(&b.fqcn));

        for collision in &collisions {
            tracing::warn!(
                root = %root.display(),
                fqcn = %collision.fqcn,
                kept = %collision.kept.display(),
                shadowed = collision.shadowed.len(),
                "FQCN declared by more than one file in the same root; keeping the first path"
            );
        }

        Self {
            by_fqcn,
            collisions,
        }
    }

    pub fn get(&self, fqcn: &str) -> Option<&Path> {
        self.by_fqcn.get(fqcn).map(PathBuf::as_path)
    }

    pub fn contains(&self, fqcn: &str) -> bool {
        self.by_fqcn.contains_key(fqcn)
    }

    pub fn fqcns(&self) -> impl Iterator<Item = &str> {
        self.by_fqcn.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_fqcn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fqcn.is_empty()
    }

    /// Within-root collisions, sorted by FQCN.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
