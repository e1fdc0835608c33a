//! Rule table and language listings.

use rvhl::Highlighter;
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};

/// Handle the `rules` command.
pub fn cmd_rules(highlighter: &Highlighter, language: &str, format: OutputFormat) -> i32 {
    let language = match highlighter.language(language) {
        Ok(language) => language,
        Err(e) => {
            error!(error = %e, "rules failed");
            return EXIT_FAILURE;
        }
    };

    for (priority, rule) in language.grammar.rules().iter().enumerate() {
        match format {
            OutputFormat::Text => println!(
                "{:>2}  {:<26} {:<11} {}",
                priority + 1,
                rule.name(),
                rule.category(),
                rule.pattern()
            ),
            OutputFormat::Raw => println!(
                "priority={} name={} category={} pattern={}",
                priority + 1,
                rule.name(),
                rule.category(),
                rule.pattern()
            ),
        }
    }
    EXIT_SUCCESS
}

/// Handle the `languages` command.
pub fn cmd_languages(highlighter: &Highlighter) -> i32 {
    for language in highlighter.registry().languages() {
        let info = &language.info;
        println!(
            "{:<8} {:<10} {:<14} {} rules",
            info.id,
            info.title,
            info.owner.as_deref().unwrap_or("-"),
            language.grammar.rules().len()
        );
    }
    EXIT_SUCCESS
}
