//! Language registry.
//!
//! Maps language ids to compiled grammars. The registry is an ordinary value
//! owned by the caller; there is no process-wide instance.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Error, Grammar, Result, RuleSpec};

/// Descriptive metadata for a registered language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: String,
    pub title: String,
    pub owner: Option<String>,
}

impl LanguageInfo {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            owner: None,
        }
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// A registered language: metadata plus its compiled rule table.
#[derive(Debug)]
pub struct Language {
    pub info: LanguageInfo,
    pub grammar: Grammar,
}

/// Language registry keyed by language id.
#[derive(Debug, Default, Clone)]
pub struct LanguageRegistry {
    languages: FxHashMap<String, Arc<Language>>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in language registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in table fails to compile.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        crate::riscv::register(&mut registry)?;
        Ok(registry)
    }

    /// Compile `rules` and register them under `info.id`.
    ///
    /// Returns the language previously registered under the same id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLanguageId`] for an empty id, or the compile error
    /// of the table. A failure leaves the registry unchanged.
    pub fn register(
        &mut self,
        info: LanguageInfo,
        rules: &[RuleSpec],
    ) -> Result<Option<Arc<Language>>> {
        if info.id.is_empty() {
            return Err(Error::EmptyLanguageId);
        }
        let grammar = Grammar::compile(info.id.clone(), rules)?;
        Ok(self.insert(Language { info, grammar }))
    }

    /// Insert an already compiled language.
    pub fn insert(&mut self, language: Language) -> Option<Arc<Language>> {
        let id = language.info.id.clone();
        let rules = language.grammar.rules().len();
        let previous = self.languages.insert(id.clone(), Arc::new(language));
        debug!(
            language = %id,
            rules,
            replaced = previous.is_some(),
            "registered language"
        );
        previous
    }

    /// Look up a language by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<Language>> {
        self.languages.get(id).cloned()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.languages.contains_key(id)
    }

    /// Remove a language, returning it if it was registered.
    pub fn remove(&mut self, id: &str) -> Option<Arc<Language>> {
        self.languages.remove(id)
    }

    /// Registered languages sorted by id.
    #[must_use]
    pub fn languages(&self) -> Vec<Arc<Language>> {
        let mut languages: Vec<_> = self.languages.values().cloned().collect();
        languages.sort_by(|a, b| a.info.id.cmp(&b.info.id));
        languages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv;

    fn classify_all(language: &Language, text: &str) -> Vec<Option<(usize, usize)>> {
        (0..text.len())
            .map(|pos| {
                language
                    .grammar
                    .classify_at(text, pos)
                    .map(|m| (m.priority, m.end))
            })
            .collect()
    }

    #[test]
    fn test_builtins_contain_riscv() {
        let registry = LanguageRegistry::with_builtins().unwrap();
        let language = registry.get(riscv::LANGUAGE_ID).unwrap();
        assert_eq!(language.info.title, "RISC-V");
        assert_eq!(language.info.owner.as_deref(), Some(riscv::OWNER));
        assert_eq!(language.grammar.rules().len(), riscv::RULES.len());
    }

    #[test]
    fn test_reregistering_is_idempotent() {
        let text = "loop:\n  addi a0, a0, -1  # dec\n  bnez a0, loop\n  ret\n";

        let mut registry = LanguageRegistry::new();
        riscv::register(&mut registry).unwrap();
        let first = classify_all(&registry.get("riscv").unwrap(), text);

        riscv::register(&mut registry).unwrap();
        assert_eq!(registry.len(), 1);
        let second = classify_all(&registry.get("riscv").unwrap(), text);

        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_registration_leaves_registry_unchanged() {
        let mut registry = LanguageRegistry::with_builtins().unwrap();
        let bad = [RuleSpec::new("broken", "[z-a]")];

        let err = registry
            .register(LanguageInfo::new("riscv", "Broken"), &bad)
            .unwrap_err();
        assert!(matches!(err, Error::Pattern { rule: "broken", .. }));

        let language = registry.get("riscv").unwrap();
        assert_eq!(language.info.title, "RISC-V");
        assert!(!registry.contains("broken"));
    }

    #[test]
    fn test_languages_sorted() {
        let mut registry = LanguageRegistry::with_builtins().unwrap();
        registry
            .register(
                LanguageInfo::new("asm", "Generic"),
                &[RuleSpec::new("word", r"\w+")],
            )
            .unwrap();
        let ids: Vec<_> = registry
            .languages()
            .iter()
            .map(|l| l.info.id.clone())
            .collect();
        assert_eq!(ids, ["asm", "riscv"]);
    }

    #[test]
    fn test_remove() {
        let mut registry = LanguageRegistry::with_builtins().unwrap();
        let removed = registry.remove(riscv::LANGUAGE_ID).unwrap();
        assert_eq!(removed.info.id, riscv::LANGUAGE_ID);
        assert!(registry.is_empty());
        assert!(registry.get(riscv::LANGUAGE_ID).is_none());
        assert!(registry.remove(riscv::LANGUAGE_ID).is_none());

        // A removed grammar stays usable by whoever still holds it.
        assert!(removed.grammar.classify_at("ret", 0).is_some());
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut registry = LanguageRegistry::new();
        let err = registry
            .register(LanguageInfo::new("", "Nothing"), &[RuleSpec::new("a", "a")])
            .unwrap_err();
        assert!(matches!(err, Error::EmptyLanguageId));
        assert!(registry.is_empty());
    }
}
