// ============================================================
// corpus-concat
// ============================================================
// Prepares plain-text corpora for language-model training by
// concatenating a tree of .txt files into one file, or into
// numbered splits of roughly equal character size.
//
// Layers (infra is cross-cutting, the rest only depend downwards):
//
//   1. cli          — argument parsing and output
//   2. application  — ConcatUseCase, ConcatConfig, ConcatReport
//   3. domain       — SourceFile, OutputSplit, ConcatError
//   4. data         — scanner, reader, writer
//   5. infra        — progress bar, JSON report

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;
