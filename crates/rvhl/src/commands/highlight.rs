//! Highlight command.

use std::io::Write;
use std::path::Path;

use rvhl::{Format, Highlighter};
use tracing::{error, info};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};

/// Handle the `highlight` command.
pub fn cmd_highlight(
    highlighter: &Highlighter,
    input: &Path,
    output: Option<&Path>,
    language: &str,
    format: Format,
) -> i32 {
    let rendered = match rvhl::highlight_file(highlighter, input, language, format) {
        Ok(rendered) => rendered,
        Err(e) => {
            error!(error = %e, path = %input.display(), "highlight failed");
            return EXIT_FAILURE;
        }
    };

    if let Some(path) = output {
        if let Err(e) = std::fs::write(path, &rendered) {
            error!(error = %e, path = %path.display(), "failed to write output");
            return EXIT_FAILURE;
        }
        info!(path = %path.display(), %format, "wrote output");
        return EXIT_SUCCESS;
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(rendered.as_bytes()).and_then(|()| stdout.flush()) {
        error!(error = %e, "failed to write to stdout");
        return EXIT_FAILURE;
    }
    EXIT_SUCCESS
}
