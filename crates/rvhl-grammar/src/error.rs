use thiserror::Error;

/// Grammar compilation and registration errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern for rule `{rule}`: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("duplicate rule name `{0}`")]
    DuplicateRule(&'static str),
    #[error("grammar `{0}` has no rules")]
    EmptyGrammar(String),
    #[error("empty language id")]
    EmptyLanguageId,
}

pub type Result<T> = std::result::Result<T, Error>;
