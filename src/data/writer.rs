// ============================================================
// Layer 4 — Split Writer
// ============================================================
// Appends source texts to the current output file and decides
// when to roll over to the next split.
//
// Each append:
//   1. In split mode, if the current split has already reached
//      the limit AND this text is non-empty, moves on to the
//      next split first
//   2. Opens the current target in append mode (created if absent)
//   3. Writes the content followed by a single '\n'
//   4. Closes the file again when the handle drops
//   5. Adds the content's character count to the split
//
// The split boundary is only ever placed between two whole
// files, so a source file is never divided across two outputs.
// A split can end up larger than the limit by up to one file's
// worth of text. Empty files never open a new split, so a
// corpus whose total fits the limit always yields one file.
//
// Example with max_chars = 5, files "hello", "" and "world":
//   append("hello") → base_1.txt, count 5, limit reached
//   append("")      → base_1.txt, empty text stays where it is
//   append("world") → base_2.txt, count 5
//
// With max_chars = 100 all files land in base_1.
//
// Existing files are never truncated. Running twice against
// the same target directory appends the corpus twice.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::error::{ConcatError, ConcatResult};
use crate::domain::output_split::{split_dir, OutputSplit};

/// Default per-split character budget
pub const DEFAULT_MAX_CHARS_PER_SPLIT: usize = 10_000_000;

/// Separator written after every source file
const RECORD_SEPARATOR: &str = "\n";

/// Single-file or split behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Single,
    Split { max_chars: usize },
}

/// Owns the running state of one concatenation run:
/// the split currently being filled and the ones already closed.
pub struct SplitWriter {
    mode:      Mode,
    base_name: String,
    /// Directory the current output lives in
    out_dir:   PathBuf,
    current:   OutputSplit,
    closed:    Vec<OutputSplit>,
}

impl SplitWriter {
    /// Everything goes to `<target_dir>/<base_name>.txt`
    pub fn single(target_dir: &Path, base_name: &str) -> Self {
        Self {
            mode:      Mode::Single,
            base_name: base_name.to_string(),
            out_dir:   target_dir.to_path_buf(),
            current:   OutputSplit::single(target_dir, base_name),
            closed:    Vec::new(),
        }
    }

    /// Numbered splits under `<target_dir>/<base_name>/`.
    ///
    /// Creates that sub-directory straight away (even if no file
    /// ends up being written). An existing directory is reused.
    pub fn split(target_dir: &Path, base_name: &str, max_chars: usize) -> ConcatResult<Self> {
        let out_dir = split_dir(target_dir, base_name);
        fs::create_dir_all(&out_dir).map_err(|e| ConcatError::io(&out_dir, e))?;
        tracing::debug!("Writing splits into '{}'", out_dir.display());

        Ok(Self {
            mode:      Mode::Split { max_chars },
            base_name: base_name.to_string(),
            current:   OutputSplit::numbered(&out_dir, base_name, 1),
            out_dir,
            closed:    Vec::new(),
        })
    }

    /// Path of the split currently being filled
    pub fn current_path(&self) -> &Path {
        &self.current.path
    }

    /// Append one source text, moving to the next split first if
    /// the current one is full and `content` is non-empty.
    pub fn append(&mut self, content: &str) -> ConcatResult<()> {
        if self.is_full() && !content.is_empty() {
            self.roll_over();
        }

        let path = self.current.path.clone();

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ConcatError::io(&path, e))?;

        f.write_all(content.as_bytes())
            .and_then(|_| f.write_all(RECORD_SEPARATOR.as_bytes()))
            .map_err(|e| ConcatError::io(&path, e))?;

        self.current.record_append(content.chars().count());
        Ok(())
    }

    /// True once the current split holds at least one file and
    /// has reached the limit. Always false in single-file mode.
    fn is_full(&self) -> bool {
        match self.mode {
            Mode::Single => false,
            Mode::Split { max_chars } => {
                self.current.files_written > 0 && self.current.chars_written >= max_chars
            }
        }
    }

    /// Close the current split and start the next numbered one
    fn roll_over(&mut self) {
        let next_index = self.current.index.unwrap_or(1) + 1;
        let next       = OutputSplit::numbered(&self.out_dir, &self.base_name, next_index);
        let done       = std::mem::replace(&mut self.current, next);

        tracing::debug!(
            "Split {} full ({} chars), continuing in '{}'",
            done.index.unwrap_or(1),
            done.chars_written,
            self.current.path.display()
        );
        self.closed.push(done);
    }

    /// Finish the run and return every output that received data.
    pub fn finish(mut self) -> Vec<OutputSplit> {
        if self.current.files_written > 0 {
            self.closed.push(self.current);
        }
        self.closed
    }
}
