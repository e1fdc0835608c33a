//! Ordered rule tables.
//!
//! A [`Grammar`] holds its rules in declaration order. At any position the
//! first rule whose pattern matches *exactly there* wins, regardless of how
//! long a later rule's match would be.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{Error, Result, Rule, RuleSpec};

/// Compiled, immutable rule table for one language.
#[derive(Debug, Clone)]
pub struct Grammar {
    id: String,
    rules: Vec<Rule>,
}

/// A rule that matched at a given position.
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'g> {
    /// The winning rule.
    pub rule: &'g Rule,
    /// Index of the rule in declaration order (0 = highest priority).
    pub priority: usize,
    pub start: usize,
    pub end: usize,
}

impl RuleMatch<'_> {
    /// Byte range of the matched text.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Grammar {
    /// Compile a rule table.
    ///
    /// # Errors
    ///
    /// Fails if any pattern is malformed, a rule name repeats, or the table
    /// is empty. Nothing is partially built on failure.
    pub fn compile(id: impl Into<String>, specs: &[RuleSpec]) -> Result<Self> {
        let id = id.into();
        if specs.is_empty() {
            return Err(Error::EmptyGrammar(id));
        }

        let mut seen = FxHashSet::default();
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            if !seen.insert(spec.name) {
                return Err(Error::DuplicateRule(spec.name));
            }
            rules.push(spec.compile()?);
        }

        debug!(language = %id, rules = rules.len(), "compiled grammar");
        Ok(Self { id, rules })
    }

    /// Language identifier this table was compiled for.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    /// Highest-priority rule matching at `pos`, or `None`.
    ///
    /// Each rule is matched against the remaining input `text[pos..]`,
    /// anchored at its start. Zero-length matches do not count. `pos` past the
    /// end of `text` or inside a multi-byte character never matches.
    #[must_use]
    pub fn classify_at<'g>(&'g self, text: &str, pos: usize) -> Option<RuleMatch<'g>> {
        let rest = text.get(pos..).filter(|rest| !rest.is_empty())?;
        self.rules.iter().enumerate().find_map(|(priority, rule)| {
            rule.match_len(rest)
                .filter(|&len| len > 0)
                .map(|len| RuleMatch {
                    rule,
                    priority,
                    start: pos,
                    end: pos + len,
                })
        })
    }

    /// Scanner answering [`Grammar::classify_at`] for many positions of `text`.
    #[must_use]
    pub fn scanner<'t>(&self, text: &'t str) -> Scanner<'_, 't> {
        Scanner {
            grammar: self,
            text,
            lookahead: vec![None; self.rules.len()],
        }
    }
}

/// Where a rule's next match starts, searched from `from`.
#[derive(Clone, Debug)]
struct Lookahead {
    from: usize,
    found: Option<Range<usize>>,
}

impl Lookahead {
    /// Still the leftmost match at or after `pos`.
    fn covers(&self, pos: usize) -> bool {
        self.from <= pos && self.found.as_ref().is_none_or(|found| pos <= found.start)
    }
}

/// Classifies successive positions of one text.
///
/// Gives the same answers as [`Grammar::classify_at`], but remembers for each
/// rule where its next match starts. A rule that cannot match anywhere in a
/// long run is searched once instead of once per position, keeping a full
/// scan linear.
#[derive(Debug)]
pub struct Scanner<'g, 't> {
    grammar: &'g Grammar,
    text: &'t str,
    lookahead: Vec<Option<Lookahead>>,
}

impl<'g> Scanner<'g, '_> {
    /// Highest-priority rule matching at `pos`, or `None`.
    pub fn classify_at(&mut self, pos: usize) -> Option<RuleMatch<'g>> {
        let (grammar, text) = (self.grammar, self.text);
        let rest = text.get(pos..).filter(|rest| !rest.is_empty())?;
        let after_word = text[..pos].chars().next_back().is_some_and(is_word_char);

        for (priority, rule) in grammar.rules.iter().enumerate() {
            let len = if rule.reuses_search(after_word) {
                self.cached_match_len(priority, rule, pos)
            } else {
                rule.match_len(rest)
            };
            if let Some(len) = len.filter(|&len| len > 0) {
                return Some(RuleMatch {
                    rule,
                    priority,
                    start: pos,
                    end: pos + len,
                });
            }
        }
        None
    }

    fn cached_match_len(&mut self, priority: usize, rule: &Rule, pos: usize) -> Option<usize> {
        let entry = &mut self.lookahead[priority];
        if !entry.as_ref().is_some_and(|lookahead| lookahead.covers(pos)) {
            *entry = Some(Lookahead {
                from: pos,
                found: rule.find_from(self.text, pos),
            });
        }
        entry
            .as_ref()?
            .found
            .as_ref()
            .filter(|found| found.start == pos)
            .map(ExactSizeIterator::len)
    }
}

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Word character as `\b` sees it.
fn is_word_char(c: char) -> bool {
    let word = WORD_PATTERN.get_or_init(|| Regex::new(r"\A\w\z").expect("word pattern is valid"));
    word.is_match(c.encode_utf8(&mut [0; 4]))
}
