// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe what a concatenation run
// works with:
//
//   SourceFile   — one .txt file found under the source dir
//   OutputSplit  — one target file receiving appended text
//   ConcatError  — every way a run can fail
//   CorpusSource — anything that can list source files
//
// Rules for this layer:
//   - NO reading or writing of file contents
//   - NO progress bars, NO printing
//   - Only structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A text file discovered during the directory scan
pub mod source_file;

// A target file and the naming rules for splits
pub mod output_split;

// Error taxonomy for the whole run
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
