// ============================================================
// Layer 3 — OutputSplit Domain Type
// ============================================================
// A target file that receives concatenated text.
//
// File naming convention:
//   single-file mode:
//     <target_dir>/<base>.txt
//   split mode:
//     <target_dir>/<base>/<base>_1.txt
//     <target_dir>/<base>/<base>_2.txt
//     ...
//
// The character count here is what decides when a split is
// full. It counts Unicode scalar values (not bytes) and does
// NOT include the newline separator the writer appends.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::source_file::TEXT_EXTENSION;

/// One output file and what has been written to it this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSplit {
    /// 1-based split number, None in single-file mode
    pub index: Option<usize>,

    /// Where the content is appended
    pub path: PathBuf,

    /// Characters appended during this run (separators excluded)
    pub chars_written: usize,

    /// Number of source files appended during this run
    pub files_written: usize,
}

impl OutputSplit {
    /// The single output file `<dir>/<base>.txt`
    pub fn single(dir: &Path, base_name: &str) -> Self {
        Self::empty(None, dir.join(file_name(base_name, None)))
    }

    /// Split number `index` inside the split directory,
    /// i.e. `<split_dir>/<base>_<index>.txt`
    pub fn numbered(split_dir: &Path, base_name: &str, index: usize) -> Self {
        Self::empty(Some(index), split_dir.join(file_name(base_name, Some(index))))
    }

    fn empty(index: Option<usize>, path: PathBuf) -> Self {
        Self {
            index,
            path,
            chars_written: 0,
            files_written: 0,
        }
    }

    /// Record that one file of `chars` characters was appended
    pub fn record_append(&mut self, chars: usize) {
        self.chars_written += chars;
        self.files_written += 1;
    }
}

/// Build the output file name for a base name and optional split index
pub fn file_name(base_name: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => format!("{base_name}_{i}.{TEXT_EXTENSION}"),
        None    => format!("{base_name}.{TEXT_EXTENSION}"),
    }
}

/// Directory that holds the numbered splits: `<target_dir>/<base>`
pub fn split_dir(target_dir: &Path, base_name: &str) -> PathBuf {
    target_dir.join(base_name)
}
