//! The generated pattern file.
//!
//! Line 1 is a comment header recording the resolved mode; every following
//! line is one pattern. Patterns are sorted and unique so unchanged input
//! always produces a byte-identical file.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use shadowguard_core::constants::GENERATOR_NAME;
use shadowguard_core::errors::OutputError;

use super::pattern::exclusion_pattern;
use crate::policy::ExclusionPolicy;

/// `# AUTO-GENERATED by shadowguard ; mode=<label> ; filter=<f> ; onDup=<a>`
pub fn header_line(mode_label: &str, policy: &ExclusionPolicy) -> String {
    format!(
        "# AUTO-GENERATED by {GENERATOR_NAME} ; mode={mode_label} ; filter={} ; onDup={}",
        policy.filter, policy.on_duplicate
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternFile {
    header: String,
    patterns: Vec<String>,
}

impl PatternFile {
    /// Build from auto-excluded FQCNs. Patterns are deduplicated and sorted.
    pub fn new<'a>(
        mode_label: &str,
        policy: &ExclusionPolicy,
        fqcns: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut patterns: Vec<String> = fqcns.into_iter().map(exclusion_pattern).collect();
        patterns.sort();
        patterns.dedup();
        Self {
            header: header_line(mode_label, policy),
            patterns,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// File content: header then one pattern per line, each newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.header.len() + 1 + self.patterns.iter().map(|p| p.len() + 1).sum::<usize>(),
        );
        out.push_str(&self.header);
        out.push('\n');
        for pattern in &self.patterns {
            out.push_str(pattern);
            out.push('\n');
        }
        out
    }

    /// Write the file atomically: a temp file in the destination directory is
    /// filled and then renamed over `path`.
    pub fn write(&self, path: &Path) -> Result<(), OutputError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let write_err = |source: std::io::Error| OutputError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(self.render().as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;

        tracing::debug!(
            path = %path.display(),
            patterns = self.patterns.len(),
            "wrote pattern file"
        );
        Ok(())
    }
}

/// Read patterns back from a generated file, skipping blank and `#` lines.
/// A missing file yields no patterns.
pub fn read_patterns(path: &Path) -> Result<Vec<String>, OutputError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(OutputError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
