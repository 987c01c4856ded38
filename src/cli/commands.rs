// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Flags accepted by the binary. Long names keep their
// underscores (`--from_dir`, not `--from-dir`) so existing
// data-prep scripts keep working unchanged.
//
// clap's derive macros generate --help, missing-argument
// errors, and string → number conversion for us.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use std::path::PathBuf;

use crate::application::concat_use_case::ConcatConfig;
use crate::data::writer::DEFAULT_MAX_CHARS_PER_SPLIT;

/// All arguments for one concatenation run.
#[derive(Args, Debug)]
pub struct ConcatArgs {
    /// Source directory, scanned recursively for .txt files
    #[arg(short = 'f', long = "from_dir")]
    pub from_dir: PathBuf,

    /// Existing directory the corpus file(s) are written into
    #[arg(short = 't', long = "target_dir")]
    pub target_dir: PathBuf,

    /// Output name without extension, e.g. "train", "dev" or "test"
    #[arg(short = 'b', long = "base_target_filename")]
    pub base_target_filename: String,

    /// Write numbered splits under <target_dir>/<base_target_filename>/
    #[arg(short = 's', long = "create_splits")]
    pub create_splits: bool,

    /// Characters per split before moving on to the next one
    /// (default 10000000; only used with --create_splits)
    #[arg(short = 'm', long = "max_chars_per_split")]
    pub max_chars_per_split: Option<usize>,

    /// Process files in lexicographic path order instead of
    /// directory-walk order
    #[arg(long)]
    pub sort: bool,

    /// Also write a JSON summary of the run to this path
    #[arg(short = 'r', long)]
    pub report: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Convert CLI ConcatArgs into the application-layer ConcatConfig.
/// The application layer never sees clap types.
impl From<&ConcatArgs> for ConcatConfig {
    fn from(a: &ConcatArgs) -> Self {
        ConcatConfig {
            from_dir:             a.from_dir.clone(),
            target_dir:           a.target_dir.clone(),
            base_target_filename: a.base_target_filename.clone(),
            create_splits:        a.create_splits,
            max_chars_per_split:  a.max_chars_per_split.unwrap_or(DEFAULT_MAX_CHARS_PER_SPLIT),
            sort:                 a.sort,
            show_progress:        !a.quiet,
        }
    }
}
