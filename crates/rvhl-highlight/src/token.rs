//! Scan loop: turns a buffer into classified tokens.
//!
//! At each position a [`Scanner`] over the grammar is asked for the
//! highest-priority rule that matches there. A match becomes a token and the
//! cursor jumps past it. Otherwise one character is taken as plain text; consecutive plain
//! characters are merged into a single token. The emitted tokens always
//! concatenate back to the input.

use std::ops::Range;

use rvhl_grammar::{Grammar, RuleMatch, Scanner};

/// Classification attached to a token produced by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenClass {
    /// Name of the rule that matched.
    pub rule: &'static str,
    /// Explicit alias of the rule, if it has one.
    pub alias: Option<&'static str>,
    /// Declaration index of the rule (0 = highest priority).
    pub priority: usize,
}

impl TokenClass {
    /// Display category: alias if present, else the rule name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.alias {
            Some(alias) => alias,
            None => self.rule,
        }
    }
}

impl From<&RuleMatch<'_>> for TokenClass {
    fn from(m: &RuleMatch<'_>) -> Self {
        Self {
            rule: m.rule.name(),
            alias: m.rule.alias(),
            priority: m.priority,
        }
    }
}

/// A contiguous span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    pub text: &'t str,
    /// Byte offset of `text` in the input.
    pub start: usize,
    /// `None` for plain text no rule claimed.
    pub class: Option<TokenClass>,
}

impl Token<'_> {
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.class.is_none()
    }

    /// Display category, `None` for plain text.
    #[must_use]
    pub const fn category(&self) -> Option<&'static str> {
        match self.class {
            Some(class) => Some(class.category()),
            None => None,
        }
    }
}

/// Lazy token stream over one input.
#[derive(Debug)]
pub struct Tokens<'g, 't> {
    scanner: Scanner<'g, 't>,
    text: &'t str,
    pos: usize,
    /// Match found while extending a plain run, emitted next.
    pending: Option<RuleMatch<'g>>,
}

impl<'g, 't> Tokens<'g, 't> {
    #[must_use]
    pub fn new(grammar: &'g Grammar, text: &'t str) -> Self {
        Self {
            scanner: grammar.scanner(text),
            text,
            pos: 0,
            pending: None,
        }
    }

    fn rule_token(&mut self, m: &RuleMatch<'g>) -> Token<'t> {
        self.pos = m.end;
        Token {
            text: &self.text[m.range()],
            start: m.start,
            class: Some(TokenClass::from(m)),
        }
    }
}

impl<'t> Iterator for Tokens<'_, 't> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        if let Some(m) = self.pending.take() {
            return Some(self.rule_token(&m));
        }
        if self.pos >= self.text.len() {
            return None;
        }
        if let Some(m) = self.scanner.classify_at(self.pos) {
            return Some(self.rule_token(&m));
        }

        let start = self.pos;
        while self.pos < self.text.len() {
            self.pos += self.text[self.pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            if let Some(m) = self.scanner.classify_at(self.pos) {
                self.pending = Some(m);
                break;
            }
        }
        Some(Token {
            text: &self.text[start..self.pos],
            start,
            class: None,
        })
    }
}

/// Tokenize a whole buffer.
#[must_use]
pub fn tokenize<'t>(grammar: &Grammar, text: &'t str) -> Vec<Token<'t>> {
    Tokens::new(grammar, text).collect()
}
