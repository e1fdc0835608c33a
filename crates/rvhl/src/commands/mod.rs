//! Command implementations.
//!
//! Each submodule handles a specific CLI command.

mod classify;
mod docs;
mod highlight;
mod rules;

use rvhl::{Highlighter, LanguageRegistry};
use tracing::error;

use crate::cli::{Cli, Commands, EXIT_FAILURE, EXIT_SUCCESS};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    let registry = match LanguageRegistry::with_builtins() {
        Ok(registry) => registry,
        Err(e) => {
            error!(error = %e, "failed to register built-in languages");
            return EXIT_FAILURE;
        }
    };
    let highlighter = Highlighter::new(registry).with_theme(cli.theme.into());

    match &cli.command {
        Commands::Highlight {
            input,
            output,
            format,
            language,
            standalone,
            color,
        } => {
            let highlighter = highlighter
                .with_standalone(*standalone)
                .with_color((*color).into());
            highlight::cmd_highlight(
                &highlighter,
                input,
                output.as_deref(),
                language,
                (*format).into(),
            )
        }
        Commands::Classify { text, at, language } => {
            classify::cmd_classify(&highlighter, language, text, *at)
        }
        Commands::Rules { language, format } => rules::cmd_rules(&highlighter, language, *format),
        Commands::Languages => rules::cmd_languages(&highlighter),
        Commands::Css => {
            print!("{}", highlighter.theme().css());
            EXIT_SUCCESS
        }
        Commands::Docs {
            inputs,
            output,
            jobs,
        } => docs::cmd_docs(&highlighter, inputs, output, *jobs, cli.silent),
    }
}
