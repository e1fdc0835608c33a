//! Batch markdown processing for documentation trees.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::{Error, Highlighter, Result};

/// Options for [`process_docs`].
#[derive(Clone, Debug)]
pub struct DocsOptions {
    /// Directory receiving the rewritten files (created if missing).
    pub output_dir: PathBuf,
    /// Worker threads (0 = one per CPU).
    pub jobs: usize,
}

impl DocsOptions {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            jobs: 0,
        }
    }

    #[must_use]
    pub const fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    fn threads(&self) -> usize {
        if self.jobs == 0 { num_cpus::get() } else { self.jobs }
    }
}

/// Outcome for one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub highlighted: usize,
    pub skipped: usize,
}

/// Outcome of a batch, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocsReport {
    pub documents: Vec<DocOutcome>,
}

impl DocsReport {
    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.documents.iter().map(|d| d.highlighted).sum()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.documents.iter().map(|d| d.skipped).sum()
    }
}

/// Rewrite each markdown input into `options.output_dir`, keeping its file name.
///
/// `on_done` is called once per finished document, from worker threads.
/// Inputs sharing a file name are rejected before anything is written.
///
/// # Errors
///
/// Stops at the first document that cannot be read or written.
pub fn process_docs<F>(
    highlighter: &Highlighter,
    inputs: &[PathBuf],
    options: &DocsOptions,
    on_done: F,
) -> Result<DocsReport>
where
    F: Fn(&DocOutcome) + Sync,
{
    let mut seen = FxHashSet::default();
    let mut jobs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = input
            .file_name()
            .ok_or_else(|| Error::NoFileName(input.clone()))?;
        let output = options.output_dir.join(name);
        if !seen.insert(output.clone()) {
            return Err(Error::DuplicateOutput(output));
        }
        jobs.push((input.as_path(), output));
    }

    std::fs::create_dir_all(&options.output_dir)
        .map_err(|e| Error::io(&options.output_dir, e))?;

    let threads = options.threads();
    debug!(documents = jobs.len(), threads, "processing docs");
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let documents = pool.install(|| {
        jobs.into_par_iter()
            .map(|(input, output)| {
                let outcome = process_one(highlighter, input, output)?;
                on_done(&outcome);
                Ok(outcome)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let report = DocsReport { documents };
    info!(
        documents = report.documents.len(),
        highlighted = report.highlighted(),
        skipped = report.skipped(),
        "docs processed"
    );
    Ok(report)
}

fn process_one(highlighter: &Highlighter, input: &Path, output: PathBuf) -> Result<DocOutcome> {
    let source = std::fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
    let result = highlighter.markdown(&source);
    std::fs::write(&output, &result.text).map_err(|e| Error::io(&output, e))?;
    debug!(
        input = %input.display(),
        highlighted = result.highlighted,
        skipped = result.skipped,
        "document written"
    );
    Ok(DocOutcome {
        input: input.to_path_buf(),
        output,
        highlighted: result.highlighted,
        skipped: result.skipped,
    })
}
