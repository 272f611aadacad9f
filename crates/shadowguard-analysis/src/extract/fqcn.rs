//! Package declaration and fully-qualified class name extraction.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// First `package a.b.c;` at the start of a line, leading whitespace allowed.
static PACKAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*package\s+([A-Za-z0-9_.]+)\s*;").expect("package regex is valid")
});

/// A class discovered in one source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub fqcn: String,
    pub file: PathBuf,
}

impl ClassRecord {
    pub fn new(content: &str, file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        Self {
            fqcn: fqcn_of(content, &file),
            file,
        }
    }
}

/// Returns the declared package, or `None` for the default package.
pub fn declared_package(content: &str) -> Option<&str> {
    PACKAGE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|pkg| !pkg.is_empty())
}

/// File name without its last extension.
pub fn class_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `package.ClassName`, or `ClassName` alone in the default package.
pub fn fqcn_of(content: &str, path: &Path) -> String {
    let class = class_name(path);
    match declared_package(content) {
        Some(pkg) => format!("{pkg}.{class}"),
        None => class,
    }
}
