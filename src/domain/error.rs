// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Three kinds of failure, none of them retried:
//
//   1. Configuration — bad arguments, caught before any output
//                      file or directory is created
//   2. Filesystem    — walk or read/write failures
//   3. Encoding      — a source file that is not valid UTF-8
//
// Every variant aborts the run. No file is ever skipped.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConcatError {
    #[error("Invalid from_dir: '{}' does not exist or is not a directory", .0.display())]
    InvalidSourceDir(PathBuf),

    #[error("Invalid target_dir: '{}' does not exist or is not a directory", .0.display())]
    InvalidTargetDir(PathBuf),

    #[error("Invalid base_target_filename: must not be empty")]
    EmptyBaseName,

    #[error("Failed to scan '{}': {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8 text: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ConcatError {
    /// Wrap an io::Error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for the errors raised by argument validation
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSourceDir(_) | Self::InvalidTargetDir(_) | Self::EmptyBaseName
        )
    }
}

pub type ConcatResult<T> = Result<T, ConcatError>;
