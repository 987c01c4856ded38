// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only needs "something that lists
// source files". Programming against a trait keeps the use
// case testable with an in-memory list and lets the scanner
// change (sorting, different extensions) without touching it.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::ConcatResult;
use crate::domain::source_file::SourceFile;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can enumerate the files of a corpus.
///
/// Implementations:
///   - TextFileScanner → recursive walk for .txt files
pub trait CorpusSource {
    /// Return every source file, in the order they should be appended.
    fn discover(&self) -> ConcatResult<Vec<SourceFile>>;
}

/// A fixed list is a source too. Handy for tests and for callers
/// that already know which files they want.
impl CorpusSource for Vec<SourceFile> {
    fn discover(&self) -> ConcatResult<Vec<SourceFile>> {
        Ok(self.clone())
    }
}
