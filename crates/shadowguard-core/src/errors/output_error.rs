//! Pattern file errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while writing or reading the generated pattern file.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write pattern file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read pattern file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
