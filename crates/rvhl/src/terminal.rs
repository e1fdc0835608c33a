//! Terminal UI utilities for progress indication and styled output.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for determinate progress.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// Create a new progress bar with a total count.
    #[must_use]
    pub fn new(total: u64, message: &str) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(bar_style) =
            ProgressStyle::default_bar().template("{msg} [{bar:30.cyan/dim}] {pos}/{len}")
        {
            bar.set_style(bar_style.progress_chars("━╸━"));
        }
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Hidden progress bar (for `--silent`).
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Increment the progress bar.
    pub fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    /// Finish the progress bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

// ============================================================================
// Styled output helpers
// ============================================================================

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Print a path output (like "-> /path/to/file").
pub fn path_output(path: &std::path::Path) {
    eprintln!("  {} {}", style("→").dim(), style(path.display()).dim());
}
