//! Token listing: one line per token with offset, rule, and category.

use std::fmt::Write;

use super::Renderer;
use crate::Token;

#[derive(Clone, Copy, Debug, Default)]
pub struct ListingRenderer {
    /// Leave plain-text tokens out of the listing.
    pub skip_plain: bool,
}

impl Renderer for ListingRenderer {
    fn render_into(&self, tokens: &[Token<'_>], out: &mut String) {
        for token in tokens {
            let (rule, category) = match token.class {
                Some(class) => (class.rule, class.category()),
                None if self.skip_plain => continue,
                None => ("-", "plain"),
            };
            let _ = writeln!(
                out,
                "{:>6}  {:<26} {:<11} {:?}",
                token.start, rule, category, token.text
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use rvhl_grammar::riscv;

    use super::*;
    use crate::tokenize;

    #[test]
    fn test_listing_lines() {
        let grammar = riscv::grammar().unwrap();
        let tokens = tokenize(&grammar, "j loop");
        let out = ListingRenderer::default().render(&tokens);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("     0  pseudo-instructions"));
        assert!(lines[0].ends_with("\"j\""));
        assert!(lines[1].contains(" plain "));
        assert!(lines[2].contains("last-literals"));
    }

    #[test]
    fn test_skip_plain() {
        let grammar = riscv::grammar().unwrap();
        let tokens = tokenize(&grammar, "j loop");
        let out = ListingRenderer { skip_plain: true }.render(&tokens);
        assert_eq!(out.lines().count(), 2);
    }
}
