// ============================================================
// Layer 4 — Text File Scanner
// ============================================================
// Walks the source directory recursively and collects every
// file whose name ends with ".txt" (case-insensitive).
//
// Order:
//   By default files come back in whatever order walkdir
//   yields them, which follows the OS directory listing and
//   is NOT guaranteed to be alphabetical. Set `sort` to get
//   a lexicographic order for reproducible output.
//
// Errors:
//   Any entry that cannot be read aborts the scan with
//   ConcatError::Walk. Nothing is skipped.
//
// Reference: walkdir crate documentation
//            Rust Book §13 (Iterators)

use std::{fs, path::PathBuf};
use walkdir::WalkDir;

use crate::domain::error::{ConcatError, ConcatResult};
use crate::domain::source_file::{is_text_file_name, SourceFile};
use crate::domain::traits::CorpusSource;

/// Recursively discovers .txt files under a root directory.
/// Implements the CorpusSource trait from Layer 3.
pub struct TextFileScanner {
    /// Directory the walk starts from
    root: PathBuf,
    /// Sort discovered paths lexicographically
    sort: bool,
}

impl TextFileScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sort: false,
        }
    }

    /// Builder-style toggle for lexicographic ordering
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}

impl CorpusSource for TextFileScanner {
    fn discover(&self) -> ConcatResult<Vec<SourceFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|source| ConcatError::Walk {
                root: self.root.clone(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !is_text_file_name(&name) {
                continue;
            }

            // fs::metadata follows symlinks, so a link to a regular
            // file counts and a link to a directory does not
            let path = entry.path();
            let meta = fs::metadata(path).map_err(|e| ConcatError::io(path, e))?;
            if !meta.is_file() {
                continue;
            }

            tracing::debug!("Found: {} ({} bytes)", path.display(), meta.len());
            files.push(SourceFile::new(path, meta.len()));
        }

        if self.sort {
            files.sort_by(|a, b| a.path().cmp(b.path()));
        }

        tracing::info!(
            "Found {} text files under '{}'",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }
}
