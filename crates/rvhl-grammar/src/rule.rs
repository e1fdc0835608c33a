//! Rule definitions.
//!
//! A [`RuleSpec`] is the uncompiled table entry (name, pattern source, alias).
//! [`Grammar::compile`](crate::Grammar::compile) turns a slice of specs into
//! compiled [`Rule`]s, preserving declaration order.

use std::fmt;
use std::ops::Range;

use regex::Regex;

use crate::{Error, Result};

/// Uncompiled rule: a name, a pattern source, and an optional display alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: &'static str,
    pub pattern: &'static str,
    pub alias: Option<&'static str>,
}

impl RuleSpec {
    /// Rule whose category is its own name.
    #[must_use]
    pub const fn new(name: &'static str, pattern: &'static str) -> Self {
        Self {
            name,
            pattern,
            alias: None,
        }
    }

    /// Set the display alias.
    #[must_use]
    pub const fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Compile the pattern twice: anchored at the cursor, and as a forward
    /// search used to skip ahead to the rule's next match.
    pub(crate) fn compile(&self) -> Result<Rule> {
        let build = |source: String| {
            Regex::new(&source).map_err(|source| Error::Pattern {
                rule: self.name,
                source,
            })
        };
        Ok(Rule {
            name: self.name,
            alias: self.alias,
            pattern: self.pattern,
            anchored: build(format!(r"\A(?:{})", self.pattern))?,
            search: build(format!("(?:{})", self.pattern))?,
            look_behind: LookBehind::of(self.pattern),
        })
    }
}

/// How much of the text before the cursor can change a rule's match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LookBehind {
    /// Nothing before the cursor is observed.
    None,
    /// Word-boundary assertions see the previous character.
    Word,
    /// Start anchors: only a match anchored at the cursor is reliable.
    Start,
}

impl LookBehind {
    /// Conservative scan of the pattern source. False positives only cost speed.
    fn of(pattern: &str) -> Self {
        if pattern.contains('^') || pattern.contains(r"\A") {
            Self::Start
        } else if [r"\b", r"\B", r"\<", r"\>"]
            .iter()
            .any(|assertion| pattern.contains(assertion))
        {
            Self::Word
        } else {
            Self::None
        }
    }
}

/// Compiled rule.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    alias: Option<&'static str>,
    pattern: &'static str,
    anchored: Regex,
    search: Regex,
    look_behind: LookBehind,
}

impl Rule {
    /// Rule name, unique within its grammar.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Explicit display alias, if any.
    #[must_use]
    pub const fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// Display category: the alias, or the rule name when no alias is set.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.alias {
            Some(alias) => alias,
            None => self.name,
        }
    }

    /// Pattern source as declared, without the start anchor.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Length of the match at the very start of `rest`, if any.
    ///
    /// `rest` is the remaining input, so a leading `\b` sees the start of
    /// `rest` as a boundary, not the text before it.
    pub(crate) fn match_len(&self, rest: &str) -> Option<usize> {
        self.anchored
            .find(rest)
            .filter(|m| m.start() == 0)
            .map(|m| m.end())
    }

    /// Leftmost match in `text[from..]`, as a range of `text`.
    ///
    /// At `from` itself this agrees with [`Rule::match_len`]. Further on it
    /// sees the real preceding text.
    pub(crate) fn find_from(&self, text: &str, from: usize) -> Option<Range<usize>> {
        self.search
            .find(text.get(from..)?)
            .map(|m| from + m.start()..from + m.end())
    }

    /// Whether a [`Rule::find_from`] result from an earlier position also
    /// answers the anchored question at a later position.
    pub(crate) const fn reuses_search(&self, after_word: bool) -> bool {
        match self.look_behind {
            LookBehind::None => true,
            LookBehind::Word => !after_word,
            LookBehind::Start => false,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("pattern", &self.pattern)
            .field("look_behind", &self.look_behind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_to_name() {
        let rule = RuleSpec::new("number", "[0-9]+").compile().unwrap();
        assert_eq!(rule.category(), "number");
        assert_eq!(rule.alias(), None);
    }

    #[test]
    fn test_category_uses_alias() {
        let rule = RuleSpec::new("labels", r"\S*:")
            .with_alias("operator")
            .compile()
            .unwrap();
        assert_eq!(rule.name(), "labels");
        assert_eq!(rule.category(), "operator");
    }

    #[test]
    fn test_bad_pattern_names_rule() {
        let err = RuleSpec::new("broken", "(unclosed").compile().unwrap_err();
        assert!(matches!(err, Error::Pattern { rule: "broken", .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_match_is_anchored() {
        let rule = RuleSpec::new("word", r"\bab\b").compile().unwrap();
        assert_eq!(rule.match_len("ab cd"), Some(2));
        assert_eq!(rule.match_len(" ab"), None);
        assert_eq!(rule.pattern(), r"\bab\b");
    }

    #[test]
    fn test_alternation_is_grouped_under_anchor() {
        // Without grouping, `\A` would only bind to the first alternative.
        let rule = RuleSpec::new("either", "x|y").compile().unwrap();
        assert_eq!(rule.match_len("zy"), None);
        assert_eq!(rule.match_len("yz"), Some(1));
    }

    #[test]
    fn test_find_from() {
        let rule = RuleSpec::new("label", r"\S*:").compile().unwrap();
        assert_eq!(rule.find_from("a b: c", 0), Some(2..4));
        assert_eq!(rule.find_from("a b: c", 4), None);
        assert_eq!(rule.find_from("a b: c", 99), None);
    }

    #[test]
    fn test_look_behind_classes() {
        assert_eq!(LookBehind::of(r"\S*:"), LookBehind::None);
        assert_eq!(LookBehind::of(r"\b[0-9]+\b"), LookBehind::Word);
        assert_eq!(LookBehind::of(r"^\s+"), LookBehind::Start);

        let word = RuleSpec::new("n", r"\b[0-9]+").compile().unwrap();
        assert!(word.reuses_search(false));
        assert!(!word.reuses_search(true));
    }

    #[test]
    fn test_debug_omits_regexes() {
        let rule = RuleSpec::new("n", "[0-9]+").compile().unwrap();
        let debug = format!("{rule:?}");
        assert!(debug.starts_with("Rule { name: \"n\""));
        assert!(debug.ends_with(", .. }"));
    }
}
