//! Docs command.

use std::path::{Path, PathBuf};

use rvhl::{DocsOptions, Highlighter};
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal::{self, Progress};

/// Handle the `docs` command.
pub fn cmd_docs(
    highlighter: &Highlighter,
    inputs: &[PathBuf],
    output: &Path,
    jobs: usize,
    silent: bool,
) -> i32 {
    let options = DocsOptions::new(output).with_jobs(jobs);
    let progress = if silent {
        Progress::hidden()
    } else {
        Progress::new(inputs.len() as u64, "Highlighting")
    };

    let report = match rvhl::process_docs(highlighter, inputs, &options, |_| progress.inc(1)) {
        Ok(report) => report,
        Err(e) => {
            progress.finish();
            error!(error = %e, "docs failed");
            return EXIT_FAILURE;
        }
    };
    progress.finish();

    if silent {
        return EXIT_SUCCESS;
    }
    for doc in &report.documents {
        if doc.highlighted == 0 {
            terminal::warning(&format!("{}: no highlighted blocks", doc.input.display()));
        }
    }
    terminal::success(&format!(
        "{} documents, {} blocks highlighted, {} skipped",
        report.documents.len(),
        report.highlighted(),
        report.skipped()
    ));
    terminal::path_output(output);
    EXIT_SUCCESS
}
