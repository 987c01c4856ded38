// ============================================================
// Layer 2 — ConcatUseCase
// ============================================================
// Runs the full concatenation in order:
//
//   Step 1: Validate the configuration    (before ANY output I/O)
//   Step 2: Discover source files         (Layer 4 - scanner)
//   Step 3: Prepare the writer            (Layer 4 - writer)
//   Step 4: Read + append every file      (Layer 4 - reader/writer)
//   Step 5: Build the run report
//
// A failure at any step aborts the run. Output written before
// the failure stays on disk.
//
// Reference: Rust Book §9 (Error Handling)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    reader::read_text_file,
    scanner::TextFileScanner,
    writer::{SplitWriter, DEFAULT_MAX_CHARS_PER_SPLIT},
};
use crate::domain::{
    error::{ConcatError, ConcatResult},
    output_split::OutputSplit,
    traits::CorpusSource,
};
use crate::infra::progress::file_progress;

// ─── Configuration ───────────────────────────────────────────────────────────
// Everything one run needs. Serialisable so a run can be
// described in (or recorded to) a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatConfig {
    pub from_dir:             PathBuf,
    pub target_dir:           PathBuf,
    pub base_target_filename: String,
    pub create_splits:        bool,
    pub max_chars_per_split:  usize,
    pub sort:                 bool,
    pub show_progress:        bool,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            from_dir:             PathBuf::new(),
            target_dir:           PathBuf::new(),
            base_target_filename: String::new(),
            create_splits:        false,
            max_chars_per_split:  DEFAULT_MAX_CHARS_PER_SPLIT,
            sort:                 false,
            show_progress:        true,
        }
    }
}

impl ConcatConfig {
    /// Check the arguments before anything is created on disk.
    pub fn validate(&self) -> ConcatResult<()> {
        if !self.from_dir.is_dir() {
            return Err(ConcatError::InvalidSourceDir(self.from_dir.clone()));
        }
        if !self.target_dir.is_dir() {
            return Err(ConcatError::InvalidTargetDir(self.target_dir.clone()));
        }
        if self.base_target_filename.is_empty() {
            return Err(ConcatError::EmptyBaseName);
        }
        Ok(())
    }
}

// ─── Run Report ──────────────────────────────────────────────────────────────
/// What a run produced, one entry per output file written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatReport {
    pub files_processed: usize,
    pub chars_written:   usize,
    pub outputs:         Vec<OutputSplit>,
}

impl ConcatReport {
    pub fn from_outputs(files_processed: usize, outputs: Vec<OutputSplit>) -> Self {
        let chars_written = outputs.iter().map(|o| o.chars_written).sum();
        Self { files_processed, chars_written, outputs }
    }
}

// ─── ConcatUseCase ───────────────────────────────────────────────────────────
pub struct ConcatUseCase {
    config: ConcatConfig,
}

impl ConcatUseCase {
    pub fn new(config: ConcatConfig) -> Self {
        Self { config }
    }

    /// Validate, scan `from_dir`, and concatenate.
    pub fn execute(&self) -> ConcatResult<ConcatReport> {
        let scanner = TextFileScanner::new(&self.config.from_dir).sorted(self.config.sort);
        self.execute_with(&scanner)
    }

    /// Same as `execute`, but with the file list coming from any
    /// CorpusSource instead of a directory walk.
    pub fn execute_with(&self, source: &dyn CorpusSource) -> ConcatResult<ConcatReport> {
        let cfg = &self.config;

        // ── Step 1: Validate ─────────────────────────────────────────────────
        cfg.validate()?;

        // ── Step 2: Discover ─────────────────────────────────────────────────
        tracing::info!("Scanning '{}' for text files", cfg.from_dir.display());
        let files = source.discover()?;

        // ── Step 3: Prepare writer ───────────────────────────────────────────
        let mut writer = if cfg.create_splits {
            SplitWriter::split(&cfg.target_dir, &cfg.base_target_filename, cfg.max_chars_per_split)?
        } else {
            SplitWriter::single(&cfg.target_dir, &cfg.base_target_filename)
        };

        // ── Step 4: Read + append ────────────────────────────────────────────
        tracing::info!("Processing {} files", files.len());
        let pb = file_progress(files.len(), cfg.show_progress);

        for file in &files {
            let text = read_text_file(file.path())?;
            writer.append(&text)?;
            tracing::debug!(
                "Appended '{}' ({} bytes) to '{}'",
                file.path().display(),
                file.byte_len(),
                writer.current_path().display()
            );
            pb.inc(1);
        }
        pb.finish_and_clear();

        // ── Step 5: Report ───────────────────────────────────────────────────
        let report = ConcatReport::from_outputs(files.len(), writer.finish());
        tracing::info!(
            "Wrote {} files ({} chars) into {} output file(s)",
            report.files_processed,
            report.chars_written,
            report.outputs.len()
        );
        Ok(report)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::source_file::SourceFile;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    /// Source and target dirs with the given (relative path, content) files
    fn fixture(files: &[(&str, &str)]) -> (TempDir, TempDir) {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = src.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        (src, dst)
    }

    fn config(src: &Path, dst: &Path, splits: bool, max_chars: usize) -> ConcatConfig {
        ConcatConfig {
            from_dir:             src.to_path_buf(),
            target_dir:           dst.to_path_buf(),
            base_target_filename: "base".to_string(),
            create_splits:        splits,
            max_chars_per_split:  max_chars,
            sort:                 true,
            show_progress:        false,
        }
    }

    fn read(path: impl AsRef<Path>) -> String {
        fs::read_to_string(path).unwrap()
    }

    /// All split files under <dst>/base, in split-index order
    fn split_contents(dst: &Path, count: usize) -> Vec<String> {
        (1..=count)
            .map(|i| read(dst.join("base").join(format!("base_{i}.txt"))))
            .collect()
    }

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(ConcatConfig::default().max_chars_per_split, 10_000_000);
        assert!(!ConcatConfig::default().create_splits);
    }

    #[test]
    fn test_single_file_mode() {
        let (src, dst) = fixture(&[("a.txt", "hello"), ("b.txt", "world")]);
        let report = ConcatUseCase::new(config(src.path(), dst.path(), false, 1))
            .execute()
            .unwrap();

        assert_eq!(read(dst.path().join("base.txt")), "hello\nworld\n");
        assert_eq!(report.files_processed, 2);
        assert_eq!(report.outputs.len(), 1);
        assert_eq!(report.outputs[0].index, None);
    }

    #[test]
    fn test_splits_under_threshold_give_one_file() {
        let (src, dst) = fixture(&[("a.txt", "hello"), ("b.txt", "world")]);
        ConcatUseCase::new(config(src.path(), dst.path(), true, 100))
            .execute()
            .unwrap();

        let split_dir = dst.path().join("base");
        assert_eq!(entries(&split_dir), 1);
        assert_eq!(read(split_dir.join("base_1.txt")), "hello\nworld\n");
    }

    #[test]
    fn test_splits_at_threshold_five() {
        let (src, dst) = fixture(&[("a.txt", "hello"), ("b.txt", "world")]);
        let report = ConcatUseCase::new(config(src.path(), dst.path(), true, 5))
            .execute()
            .unwrap();

        assert_eq!(split_contents(dst.path(), 2), vec!["hello\n", "world\n"]);
        assert_eq!(entries(&dst.path().join("base")), 2);
        assert_eq!(report.outputs.len(), 2);
    }

    #[test]
    fn test_whitespace_base_name_is_accepted() {
        let (src, dst) = fixture(&[("a.txt", "hello")]);
        let mut cfg    = config(src.path(), dst.path(), false, 5);
        cfg.base_target_filename = " ".into();

        ConcatUseCase::new(cfg).execute().unwrap();
        assert_eq!(read(dst.path().join(" .txt")), "hello\n");
    }

    #[test]
    fn test_trailing_empty_file_at_threshold_keeps_one_split() {
        let (src, dst) = fixture(&[("a.txt", "hello"), ("b.txt", "")]);
        let report = ConcatUseCase::new(config(src.path(), dst.path(), true, 5))
            .execute()
            .unwrap();

        assert_eq!(report.outputs.len(), 1);
        assert_eq!(entries(&dst.path().join("base")), 1);
        assert_eq!(split_contents(dst.path(), 1), vec!["hello\n\n"]);
    }

    #[test]
    fn test_threshold_one_gives_one_split_per_file() {
        let (src, dst) = fixture(&[
            ("a.txt", "alpha"),
            ("b.txt", "b"),
            ("c/d.txt", "delta"),
            ("c/e.txt", "echo"),
        ]);
        let report = ConcatUseCase::new(config(src.path(), dst.path(), true, 1))
            .execute()
            .unwrap();

        assert_eq!(report.outputs.len(), 4);
        assert_eq!(entries(&dst.path().join("base")), 4);
        for out in &report.outputs {
            assert_eq!(out.files_written, 1);
        }
    }

    #[test]
    fn test_split_outputs_join_to_single_output() {
        let files = [
            ("01.txt", "Lorem ipsum dolor sit amet"),
            ("02.txt", "consectetur"),
            ("03.txt", ""),
            ("sub/04.txt", "adipiscing elit, sed do eiusmod"),
            ("sub/05.txt", "tempor\nincididunt"),
            ("sub/x/06.txt", "ut labore et dolore magna aliqua"),
        ];

        let (src, single_dst) = fixture(&files);
        ConcatUseCase::new(config(src.path(), single_dst.path(), false, 0))
            .execute()
            .unwrap();
        let single = read(single_dst.path().join("base.txt"));

        for max_chars in [1, 10, 30, 50, 1_000] {
            let split_dst = tempfile::tempdir().unwrap();
            let report = ConcatUseCase::new(config(src.path(), split_dst.path(), true, max_chars))
                .execute()
                .unwrap();

            let joined = split_contents(split_dst.path(), report.outputs.len()).concat();
            assert_eq!(joined, single, "max_chars = {max_chars}");
        }
    }

    #[test]
    fn test_no_source_file_is_divided() {
        let files = [
            ("a.txt", "first file"),
            ("b.txt", "second, somewhat longer file"),
            ("c.txt", "third"),
        ];
        let (src, dst) = fixture(&files);
        let report = ConcatUseCase::new(config(src.path(), dst.path(), true, 12))
            .execute()
            .unwrap();

        let outputs = split_contents(dst.path(), report.outputs.len());
        for (_, content) in files {
            let record = format!("{content}\n");
            assert_eq!(
                outputs.iter().filter(|o| o.contains(&record)).count(),
                1,
                "'{content}' should be whole in exactly one split"
            );
        }
    }

    #[test]
    fn test_rerun_appends() {
        let (src, dst) = fixture(&[("a.txt", "hello")]);
        let use_case   = ConcatUseCase::new(config(src.path(), dst.path(), false, 10));
        use_case.execute().unwrap();
        use_case.execute().unwrap();

        assert_eq!(read(dst.path().join("base.txt")), "hello\nhello\n");
    }

    #[test]
    fn test_rerun_in_split_mode_appends() {
        let (src, dst) = fixture(&[("a.txt", "hello")]);
        let use_case   = ConcatUseCase::new(config(src.path(), dst.path(), true, 100));
        use_case.execute().unwrap();
        use_case.execute().unwrap();

        assert_eq!(read(dst.path().join("base/base_1.txt")), "hello\nhello\n");
    }

    #[test]
    fn test_missing_from_dir_creates_nothing() {
        let (src, dst) = fixture(&[]);
        let cfg        = config(&src.path().join("missing"), dst.path(), true, 5);

        let err = ConcatUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err, ConcatError::InvalidSourceDir(_)));
        assert!(err.is_config_error());
        assert_eq!(entries(dst.path()), 0);
    }

    #[test]
    fn test_from_dir_that_is_a_file_is_rejected() {
        let (src, dst) = fixture(&[("a.txt", "hello")]);
        let cfg = config(&src.path().join("a.txt"), dst.path(), false, 5);

        let err = ConcatUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err, ConcatError::InvalidSourceDir(_)));
    }

    #[test]
    fn test_missing_target_dir_is_rejected() {
        let (src, dst) = fixture(&[("a.txt", "hello")]);
        let cfg = config(src.path(), &dst.path().join("missing"), true, 5);

        let err = ConcatUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err, ConcatError::InvalidTargetDir(_)));
        assert!(!dst.path().join("missing").exists());
    }

    #[test]
    fn test_empty_base_name_is_rejected() {
        let (src, dst) = fixture(&[("a.txt", "hello")]);
        let mut cfg    = config(src.path(), dst.path(), true, 5);
        cfg.base_target_filename = String::new();

        let err = ConcatUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err, ConcatError::EmptyBaseName));
        assert_eq!(entries(dst.path()), 0);
    }

    #[test]
    fn test_invalid_utf8_aborts_the_run() {
        let (src, dst) = fixture(&[("a.txt", "hello")]);
        fs::write(src.path().join("b.txt"), [0xFF, 0xFE, 0x00]).unwrap();
        fs::write(src.path().join("c.txt"), "never reached").unwrap();

        let err = ConcatUseCase::new(config(src.path(), dst.path(), false, 5))
            .execute()
            .unwrap_err();
        assert!(matches!(err, ConcatError::Encoding { .. }));

        // sorted order: a.txt was written before b.txt failed
        assert_eq!(read(dst.path().join("base.txt")), "hello\n");
    }

    #[test]
    fn test_empty_source_dir() {
        let (src, dst) = fixture(&[]);
        let report = ConcatUseCase::new(config(src.path(), dst.path(), true, 5))
            .execute()
            .unwrap();

        assert_eq!(report.files_processed, 0);
        assert!(report.outputs.is_empty());
        assert!(dst.path().join("base").is_dir());
        assert_eq!(entries(&dst.path().join("base")), 0);
    }

    #[test]
    fn test_execute_with_explicit_file_list_keeps_its_order() {
        let (src, dst) = fixture(&[("a.txt", "hello"), ("b.txt", "world")]);
        let list = vec![
            SourceFile::new(src.path().join("b.txt"), 5),
            SourceFile::new(src.path().join("a.txt"), 5),
        ];

        ConcatUseCase::new(config(src.path(), dst.path(), false, 5))
            .execute_with(&list)
            .unwrap();

        assert_eq!(read(dst.path().join("base.txt")), "world\nhello\n");
    }

    #[test]
    fn test_report_totals() {
        let (src, dst) = fixture(&[("a.txt", "hello"), ("b.txt", "wörld")]);
        let report = ConcatUseCase::new(config(src.path(), dst.path(), true, 5))
            .execute()
            .unwrap();

        assert_eq!(report.chars_written, 10);
        assert_eq!(
            report.outputs.iter().map(|o| o.files_written).sum::<usize>(),
            2
        );
    }
}
