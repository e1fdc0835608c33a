//! rvhl - RISC-V assembly syntax highlighter
//!
//! Classifies RISC-V assembly into display categories and renders it as
//! Prism-compatible HTML, terminal colors, or a token listing. Also rewrites
//! markdown documentation, highlighting fenced `riscv` blocks in place.
//!
//! # Example
//!
//! ```
//! use rvhl::{Format, Highlighter, LanguageRegistry};
//!
//! let highlighter = Highlighter::new(LanguageRegistry::with_builtins()?);
//! let html = highlighter.render("riscv", "li a0, 42\nret\n", Format::Html)?;
//! assert!(html.contains("<span class=\"token pseudo-instructions important\">li</span>"));
//! assert!(html.contains("<span class=\"token number\">42</span>"));
//! # Ok::<(), rvhl::Error>(())
//! ```

// Re-export from sub-crates
pub use rvhl_grammar::{
    Grammar, Language, LanguageInfo, LanguageRegistry, Rule, RuleMatch, RuleSpec, Scanner, riscv,
};
pub use rvhl_highlight::{
    AnsiRenderer, ColorMode, Format, Highlighter, HtmlOptions, HtmlRenderer, ListingRenderer,
    MarkdownOptions, MarkdownOutput, Renderer, Theme, ThemeEntry, Token, TokenClass, Tokens,
    highlight_markdown, tokenize,
};

mod docs;
mod error;

pub use docs::{DocOutcome, DocsOptions, DocsReport, process_docs};
pub use error::{Error, Result};

use std::io::Read;
use std::path::Path;

/// Read a source file, or stdin when `path` is `-`.
///
/// # Errors
///
/// Returns [`Error::File`] naming `path` if it cannot be read, or
/// [`Error::Io`] if stdin fails.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|source| Error::io(path, source))
}

/// Read and render one file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or `language` is not registered.
pub fn highlight_file(
    highlighter: &Highlighter,
    path: &Path,
    language: &str,
    format: Format,
) -> Result<String> {
    let source = read_source(path)?;
    Ok(highlighter.render(language, &source, format)?)
}
