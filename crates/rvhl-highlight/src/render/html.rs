//! Prism-compatible HTML output.
//!
//! Rule tokens become `<span class="token RULE ALIAS">`. Plain text is only
//! escaped.

use std::fmt::Write;

use super::Renderer;
use crate::{Theme, Token};

/// HTML output options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Language id used in `language-*` classes.
    pub language: String,
    /// Wrap output in `<pre><code>`.
    pub wrap: bool,
    /// Emit a full HTML document with an embedded stylesheet.
    pub standalone: bool,
}

impl HtmlOptions {
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            wrap: true,
            standalone: false,
        }
    }

    #[must_use]
    pub const fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub const fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new(rvhl_grammar::riscv::LANGUAGE_ID)
    }
}

/// HTML renderer.
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    pub options: HtmlOptions,
    pub theme: Theme,
}

impl HtmlRenderer {
    #[must_use]
    pub const fn new(options: HtmlOptions, theme: Theme) -> Self {
        Self { options, theme }
    }

    fn render_spans(tokens: &[Token<'_>], out: &mut String) {
        for token in tokens {
            let Some(class) = token.class else {
                escape_html(token.text, out);
                continue;
            };
            out.push_str("<span class=\"token ");
            out.push_str(class.rule);
            if let Some(alias) = class.alias.filter(|alias| *alias != class.rule) {
                out.push(' ');
                out.push_str(alias);
            }
            out.push_str("\">");
            escape_html(token.text, out);
            out.push_str("</span>");
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render_into(&self, tokens: &[Token<'_>], out: &mut String) {
        let options = &self.options;
        if options.standalone {
            out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
            out.push_str(&self.theme.css());
            out.push_str("</style>\n</head>\n<body>\n");
        }
        let wrap = options.wrap || options.standalone;
        if wrap {
            let _ = write!(
                out,
                "<pre class=\"language-{0}\"><code class=\"language-{0}\">",
                options.language
            );
        }
        Self::render_spans(tokens, out);
        if wrap {
            out.push_str("</code></pre>\n");
        }
        if options.standalone {
            out.push_str("</body>\n</html>\n");
        }
    }
}

/// Append `text` to `out` with HTML special characters escaped.
pub fn escape_html(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use rvhl_grammar::riscv;

    use super::*;
    use crate::tokenize;

    fn render(text: &str, options: HtmlOptions) -> String {
        let grammar = riscv::grammar().unwrap();
        let tokens = tokenize(&grammar, text);
        HtmlRenderer::new(options, Theme::nord()).render(&tokens)
    }

    #[test]
    fn test_spans_carry_rule_and_alias() {
        let html = render("ret", HtmlOptions::default().with_wrap(false));
        assert_eq!(
            html,
            "<span class=\"token pseudo-instructions important\">ret</span>"
        );
    }

    #[test]
    fn test_rule_without_alias_has_single_class() {
        let html = render("42", HtmlOptions::default().with_wrap(false));
        assert_eq!(html, "<span class=\"token number\">42</span>");
    }

    #[test]
    fn test_punctuation_gets_a_span() {
        let html = render("sd ra, 8(sp)", HtmlOptions::default().with_wrap(false));
        assert!(html.contains("<span class=\"token last-literals\">,</span> "));
        assert!(html.contains("<span class=\"token last-literals\">(</span>"));
        assert!(html.ends_with("<span class=\"token last-literals\">)</span>"));
    }

    #[test]
    fn test_wrapped_block_escapes_text() {
        let html = render("li a0, 1 # a<b && c>d\n", HtmlOptions::default());
        assert!(html.starts_with("<pre class=\"language-riscv\"><code class=\"language-riscv\">"));
        assert!(html.ends_with("</code></pre>\n"));
        assert!(html.contains("# a&lt;b &amp;&amp; c&gt;d\n</span>"));
    }

    #[test]
    fn test_standalone_embeds_stylesheet() {
        let html = render("nop", HtmlOptions::default().with_standalone(true));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(".token.important"));
        assert!(html.contains("<pre class=\"language-riscv\">"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_escape_html() {
        let mut out = String::new();
        escape_html(r#"<"'&'">"#, &mut out);
        assert_eq!(out, "&lt;&quot;&#39;&amp;&#39;&quot;&gt;");
    }
}
