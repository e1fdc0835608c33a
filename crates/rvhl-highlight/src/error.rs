use thiserror::Error;

/// Highlighting errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),
    #[error("unknown output format `{0}` (expected html, ansi or tokens)")]
    UnknownFormat(String),
    #[error("unknown theme `{0}` (expected nord or plain)")]
    UnknownTheme(String),
    #[error("unknown color mode `{0}` (expected auto, always or never)")]
    UnknownColorMode(String),
    #[error("grammar error: {0}")]
    Grammar(#[from] rvhl_grammar::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
