// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches file contents lives here.
//
// The pipeline flows in this order:
//
//   source dir
//       │
//       ▼
//   TextFileScanner  → walks the tree, lists .txt files
//       │
//       ▼
//   read_text_file   → loads one file as strict UTF-8
//       │
//       ▼
//   SplitWriter      → appends to the current output,
//                      rolls over to the next split when full
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §12 (I/O), §13 (Iterators)

/// Recursive discovery of .txt files
pub mod scanner;

/// Strict UTF-8 file reading
pub mod reader;

/// Append-mode output with split roll-over
pub mod writer;
