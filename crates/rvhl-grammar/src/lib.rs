//! Token classifier tables for syntax highlighting.
//!
//! A language is described by an ordered list of [`RuleSpec`]s. Compiling
//! them yields a [`Grammar`], which answers one question: which rule, in
//! declaration order, matches at a given position? A [`Scanner`] answers the
//! same question for many positions of one text without rescanning long runs.
//! The loop that turns a whole buffer into tokens lives in `rvhl-highlight`.
//!
//! # Example
//!
//! ```
//! use rvhl_grammar::{LanguageRegistry, riscv};
//!
//! let mut registry = LanguageRegistry::new();
//! riscv::register(&mut registry)?;
//!
//! let language = registry.get("riscv").unwrap();
//! let m = language.grammar.classify_at("ret", 0).unwrap();
//! assert_eq!(m.rule.name(), "pseudo-instructions");
//! assert_eq!(m.rule.category(), "important");
//! # Ok::<(), rvhl_grammar::Error>(())
//! ```

mod error;
mod grammar;
mod registry;
mod rule;
pub mod riscv;

pub use error::{Error, Result};
pub use grammar::{Grammar, RuleMatch, Scanner};
pub use registry::{Language, LanguageInfo, LanguageRegistry};
pub use rule::{Rule, RuleSpec};
