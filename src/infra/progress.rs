// ============================================================
// Layer 5 — Progress Bar
// ============================================================
// Thin wrapper around indicatif so the use case never has to
// know about templates or draw targets.

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Build a progress bar for `total` files.
/// Returns a hidden bar when `visible` is false.
pub fn file_progress(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    // fall back to indicatif's default look if the template is rejected
    let style = ProgressStyle::default_bar()
        .template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}
