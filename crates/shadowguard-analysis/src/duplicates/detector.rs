//! Intersection of two class indexes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shadowguard_core::errors::ScanError;

use super::index::ClassIndex;
use crate::classify::{is_stereotype, matched_annotation};
use crate::scanner::read_source;

/// A class present in both roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    pub fqcn: String,
    pub main_file: PathBuf,
    pub clean_file: PathBuf,
    /// Whether the canonical copy carries a stereotype annotation.
    pub is_stereotype: bool,
}

/// FQCNs present in both indexes, sorted and deduplicated.
pub fn duplicate_fqcns(main: &ClassIndex, clean: &ClassIndex) -> Vec<String> {
    let mut shared: Vec<String> = clean
        .fqcns()
        .filter(|fqcn| main.contains(fqcn))
        .map(str::to_string)
        .collect();
    shared.sort();
    shared.dedup();
    shared
}

/// Build a `DuplicateEntry` for every shared FQCN, classifying the canonical
/// copy. The legacy copy's content is never read.
pub fn find_duplicates(
    main: &ClassIndex,
    clean: &ClassIndex,
) -> Result<Vec<DuplicateEntry>, ScanError> {
    let mut duplicates = Vec::new();
    for fqcn in duplicate_fqcns(main, clean) {
        let (Some(main_file), Some(clean_file)) = (main.get(&fqcn), clean.get(&fqcn)) else {
            continue;
        };
        let content = read_source(main_file)?;
        let stereotype = is_stereotype(&content);
        tracing::trace!(
            fqcn = %fqcn,
            annotation = matched_annotation(&content).unwrap_or("-"),
            "classified canonical copy"
        );
        duplicates.push(DuplicateEntry {
            main_file: main_file.to_path_buf(),
            clean_file: clean_file.to_path_buf(),
            is_stereotype: stereotype,
            fqcn,
        });
    }
    Ok(duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ClassRecord;
    use std::fs;
    use std::path::Path;

    fn index(root: &str, fqcns: &[&str]) -> ClassIndex {
        let records = fqcns
            .iter()
            .map(|f| ClassRecord {
                fqcn: f.to_string(),
                file: PathBuf::from(format!("{root}/{f}.java")),
            })
            .collect();
        ClassIndex::from_records(Path::new(root), records)
    }

    #[test]
    fn intersection_is_sorted() {
        let main = index("main", &["z.Z", "a.A", "m.M", "only.Main"]);
        let clean = index("clean", &["m.M", "z.Z", "a.A", "only.Clean"]);
        assert_eq!(duplicate_fqcns(&main, &clean), vec!["a.A", "m.M", "z.Z"]);
    }

    #[test]
    fn disjoint_roots_have_no_duplicates() {
        let main = index("main", &["a.A"]);
        let clean = index("clean", &["b.B"]);
        assert!(duplicate_fqcns(&main, &clean).is_empty());
    }

    #[test]
    fn only_the_canonical_copy_is_classified() {
        let dir = tempfile::TempDir::new().unwrap();
        let main = dir.path().join("main/Foo.java");
        let clean = dir.path().join("clean/Foo.java");
        fs::create_dir_all(main.parent().unwrap()).unwrap();
        fs::create_dir_all(clean.parent().unwrap()).unwrap();
        fs::write(&main, "package com.x;\npublic class Foo {}\n").unwrap();
        fs::write(&clean, "package com.x;\n@Service\npublic class Foo {}\n").unwrap();

        let record = |file: &Path| ClassRecord {
            fqcn: "com.x.Foo".to_string(),
            file: file.to_path_buf(),
        };
        let main_index = ClassIndex::from_records(dir.path(), vec![record(&main)]);
        let clean_index = ClassIndex::from_records(dir.path(), vec![record(&clean)]);

        let duplicates = find_duplicates(&main_index, &clean_index).unwrap();
        assert_eq!(duplicates.len(), 1);
        assert!(!duplicates[0].is_stereotype);
    }
}
