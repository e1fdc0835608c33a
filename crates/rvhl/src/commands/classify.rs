//! Classify command.

use rvhl::Highlighter;
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};

/// Handle the `classify` command.
///
/// Prints `rule<TAB>category<TAB>matched text`, or `-` when no rule matches
/// (the character would be plain text).
pub fn cmd_classify(highlighter: &Highlighter, language: &str, text: &str, at: usize) -> i32 {
    let language = match highlighter.language(language) {
        Ok(language) => language,
        Err(e) => {
            error!(error = %e, "classify failed");
            return EXIT_FAILURE;
        }
    };
    if at > text.len() {
        error!(at, len = text.len(), "offset past end of text");
        return EXIT_FAILURE;
    }

    let line = language.grammar.classify_at(text, at).map_or_else(
        || "-".to_string(),
        |m| {
            format!(
                "{}\t{}\t{:?}",
                m.rule.name(),
                m.rule.category(),
                &text[m.range()]
            )
        },
    );
    println!("{line}");
    EXIT_SUCCESS
}
