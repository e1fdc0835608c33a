//! Token renderers.
//!
//! Each output format implements [`Renderer`]. Renderers only decorate
//! token text; they never drop or reorder it.

mod ansi;
mod html;
mod listing;

use std::fmt;
use std::str::FromStr;

pub use ansi::{AnsiRenderer, ColorMode};
pub use html::{HtmlOptions, HtmlRenderer, escape_html};
pub use listing::ListingRenderer;

use crate::{Error, Token};

/// Output sink for a token stream.
pub trait Renderer {
    /// Append the rendering of `tokens` to `out`.
    fn render_into(&self, tokens: &[Token<'_>], out: &mut String);

    /// Render `tokens` to a new string.
    fn render(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::new();
        self.render_into(tokens, &mut out);
        out
    }
}

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Prism-compatible HTML markup.
    #[default]
    Html,
    /// Terminal escape sequences.
    Ansi,
    /// One line per token, for inspecting a grammar.
    Tokens,
}

impl Format {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Ansi => "ansi",
            Self::Tokens => "tokens",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "ansi" | "term" | "terminal" => Ok(Self::Ansi),
            "tokens" => Ok(Self::Tokens),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}
