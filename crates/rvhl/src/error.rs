use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("grammar error: {0}")]
    Grammar(#[from] rvhl_grammar::Error),
    #[error(transparent)]
    Highlight(#[from] rvhl_highlight::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("input has no file name: {}", .0.display())]
    NoFileName(PathBuf),
    #[error("several inputs map to the same output {}", .0.display())]
    DuplicateOutput(PathBuf),
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
