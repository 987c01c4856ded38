// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands a ConcatConfig to the
// application layer, and prints the outcome.
//
// Any error bubbles up to main() as anyhow::Error, which
// prints it and exits with a non-zero status.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::ConcatArgs;

use crate::application::concat_use_case::{ConcatConfig, ConcatUseCase};
use crate::infra::report::save_report;

#[derive(Parser, Debug)]
#[command(
    name = "corpus-concat",
    version,
    about = "Traverses the given source dir for .txt files and concatenates them \
             into the given file name in the given target dir (optionally as splits)."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: ConcatArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let args = &self.args;

        if args.max_chars_per_split.is_some() && !args.create_splits {
            tracing::warn!("--max_chars_per_split has no effect without --create_splits");
        }

        let config   = ConcatConfig::from(args);
        let use_case = ConcatUseCase::new(config);
        let report   = use_case
            .execute()
            .with_context(|| {
                format!("Concatenating '{}' failed", args.from_dir.display())
            })?;

        if let Some(path) = &args.report {
            save_report(&report, path)?;
        }

        for out in &report.outputs {
            println!(
                "{} ({} files, {} chars)",
                out.path.display(),
                out.files_written,
                out.chars_written
            );
        }
        println!("Concatenated {} files.", report.files_processed);
        Ok(())
    }
}
