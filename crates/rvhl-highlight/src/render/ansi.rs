//! Terminal output.

use std::fmt::Write;
use std::str::FromStr;

use super::Renderer;
use crate::{Error, Theme, Token};

/// When to emit escape sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Follow `console`'s terminal detection (honours `NO_COLOR` / `CLICOLOR`).
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(Error::UnknownColorMode(s.to_string())),
        }
    }
}

/// ANSI renderer driven by a [`Theme`].
#[derive(Clone, Debug, Default)]
pub struct AnsiRenderer {
    pub theme: Theme,
    pub mode: ColorMode,
}

impl AnsiRenderer {
    #[must_use]
    pub const fn new(theme: Theme, mode: ColorMode) -> Self {
        Self { theme, mode }
    }
}

impl Renderer for AnsiRenderer {
    fn render_into(&self, tokens: &[Token<'_>], out: &mut String) {
        for token in tokens {
            let category = match (token.category(), self.mode) {
                (Some(category), ColorMode::Auto | ColorMode::Always) => category,
                _ => {
                    out.push_str(token.text);
                    continue;
                }
            };
            let mut style = self.theme.ansi_style(category);
            if self.mode == ColorMode::Always {
                style = style.force_styling(true);
            }
            let _ = write!(out, "{}", style.apply_to(token.text));
        }
    }
}

#[cfg(test)]
mod tests {
    use rvhl_grammar::riscv;

    use super::*;
    use crate::tokenize;

    const SOURCE: &str = "_start:\n  la a0, msg # load\n  ecall\n";

    #[test]
    fn test_never_is_verbatim() {
        let grammar = riscv::grammar().unwrap();
        let tokens = tokenize(&grammar, SOURCE);
        let out = AnsiRenderer::new(Theme::nord(), ColorMode::Never).render(&tokens);
        assert_eq!(out, SOURCE);
    }

    #[test]
    fn test_always_styles_and_strips_back() {
        let grammar = riscv::grammar().unwrap();
        let tokens = tokenize(&grammar, SOURCE);
        let out = AnsiRenderer::new(Theme::nord(), ColorMode::Always).render(&tokens);
        assert!(out.contains("\x1b["));
        assert_eq!(console::strip_ansi_codes(&out), SOURCE);
    }

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert!("sometimes".parse::<ColorMode>().is_err());
    }
}
