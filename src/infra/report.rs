// ============================================================
// Layer 5 — Report Writer
// ============================================================
// Saves a ConcatReport as pretty-printed JSON.
//
// Example output:
//   {
//     "files_processed": 2,
//     "chars_written": 10,
//     "outputs": [
//       { "index": 1, "path": "out/train/train_1.txt",
//         "chars_written": 10, "files_written": 2 }
//     ]
//   }
//
// The report is overwritten on every run, unlike the corpus
// files themselves which are only ever appended to.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::concat_use_case::ConcatReport;

/// Write `report` to `path` as JSON, replacing any previous report.
pub fn save_report(report: &ConcatReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

    tracing::debug!("Saved run report to '{}'", path.display());
    Ok(())
}

/// Read a report back, e.g. to inspect a previous run.
pub fn load_report(path: &Path) -> Result<ConcatReport> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read report from '{}'", path.display()))?;

    Ok(serde_json::from_str(&json)?)
}
