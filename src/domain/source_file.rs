// ============================================================
// Layer 3 — SourceFile Domain Type
// ============================================================
// One text file discovered under the source directory.
//
// A SourceFile is created by the scanner, consumed exactly
// once by the writer, and then dropped. It never changes
// after discovery, so all fields are private with getters.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extension (without the dot) of the files we pick up and produce
pub const TEXT_EXTENSION: &str = "txt";

/// A text file found during the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Full path as yielded by the directory walk
    path: PathBuf,

    /// Size on disk in bytes, taken from metadata at discovery time.
    /// Only used for logging; the writer counts characters itself.
    byte_len: u64,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, byte_len: u64) -> Self {
        Self {
            path: path.into(),
            byte_len,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }
}

/// Returns true if a file name ends with `.txt`, ignoring case.
///
/// Matches on the whole name rather than `Path::extension()`
/// so that a bare `.TXT` file is still picked up.
pub fn is_text_file_name(name: &str) -> bool {
    name.to_lowercase()
        .ends_with(&format!(".{TEXT_EXTENSION}"))
}
