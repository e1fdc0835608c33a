//! Host side of rvhl: the scan loop, renderers, themes, and the markdown pass.
//!
//! # Example
//!
//! ```
//! use rvhl_grammar::LanguageRegistry;
//! use rvhl_highlight::{Format, Highlighter};
//!
//! let highlighter = Highlighter::new(LanguageRegistry::with_builtins()?);
//! let html = highlighter.render("riscv", "ret", Format::Html)?;
//! assert!(html.contains("<span class=\"token pseudo-instructions important\">ret</span>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod markdown;
pub mod render;
mod theme;
mod token;

use std::sync::Arc;

use rvhl_grammar::{Language, LanguageRegistry};

pub use error::{Error, Result};
pub use markdown::{MarkdownOptions, MarkdownOutput, highlight_markdown};
pub use render::{
    AnsiRenderer, ColorMode, Format, HtmlOptions, HtmlRenderer, ListingRenderer, Renderer,
};
pub use theme::{Theme, ThemeEntry};
pub use token::{Token, TokenClass, Tokens, tokenize};

/// Registry plus rendering settings.
#[derive(Debug, Clone)]
pub struct Highlighter {
    registry: LanguageRegistry,
    theme: Theme,
    color: ColorMode,
    standalone: bool,
}

impl Highlighter {
    #[must_use]
    pub fn new(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            theme: Theme::default(),
            color: ColorMode::default(),
            standalone: false,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Emit full HTML documents instead of fragments.
    #[must_use]
    pub const fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Look up a registered language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] if `id` is not registered.
    pub fn language(&self, id: &str) -> Result<Arc<Language>> {
        self.registry
            .get(id)
            .ok_or_else(|| Error::UnknownLanguage(id.to_string()))
    }

    /// Render `text` in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] if `language` is not registered.
    pub fn render(&self, language: &str, text: &str, format: Format) -> Result<String> {
        let language = self.language(language)?;
        let tokens = tokenize(&language.grammar, text);
        let out = match format {
            Format::Html => HtmlRenderer::new(
                HtmlOptions::new(language.info.id.clone()).with_standalone(self.standalone),
                self.theme.clone(),
            )
            .render(&tokens),
            Format::Ansi => AnsiRenderer::new(self.theme.clone(), self.color).render(&tokens),
            Format::Tokens => ListingRenderer::default().render(&tokens),
        };
        Ok(out)
    }

    /// Run the markdown pass with this highlighter's theme.
    #[must_use]
    pub fn markdown(&self, source: &str) -> MarkdownOutput {
        let options = MarkdownOptions::default().with_theme(self.theme.clone());
        highlight_markdown(&self.registry, source, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> Highlighter {
        Highlighter::new(LanguageRegistry::with_builtins().unwrap())
    }

    #[test]
    fn test_unknown_language() {
        let err = highlighter().render("mips", "nop", Format::Html).unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(ref id) if id == "mips"));
    }

    #[test]
    fn test_render_formats() {
        let h = highlighter().with_color(ColorMode::Never);
        assert_eq!(h.render("riscv", "ecall\n", Format::Ansi).unwrap(), "ecall\n");
        let listing = h.render("riscv", "ecall\n", Format::Tokens).unwrap();
        assert!(listing.contains("privilege-instructions"));
        let html = h.with_standalone(true).render("riscv", "ecall", Format::Html).unwrap();
        assert!(html.contains("<style>"));
    }
}
