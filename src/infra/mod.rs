// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that are not part of the
// concatenation logic itself:
//
//   progress.rs — Terminal progress bar
//                 One tick per source file. Hidden when the
//                 user passes --quiet (and in tests).
//
//   report.rs   — Run report persistence
//                 Writes the ConcatReport as pretty JSON so a
//                 later training step can see which splits
//                 exist and how large they are.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Progress bar over the file list
pub mod progress;

/// JSON run report writer
pub mod report;
