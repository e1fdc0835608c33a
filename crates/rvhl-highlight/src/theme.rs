//! Color themes.
//!
//! A theme maps display categories to a CSS color (HTML output) and a
//! terminal color (ANSI output). Categories without an entry render as plain
//! text.

use std::fmt::Write;
use std::str::FromStr;

use console::{Color, Style};

use crate::Error;

/// Colors for one display category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeEntry {
    pub category: String,
    /// CSS color value, e.g. `#81a1c1`.
    pub css: String,
    pub ansi: Color,
    pub bold: bool,
}

impl ThemeEntry {
    #[must_use]
    pub fn new(category: impl Into<String>, css: impl Into<String>, ansi: Color) -> Self {
        Self {
            category: category.into(),
            css: css.into(),
            ansi,
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Category-to-color mapping plus page-level colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    /// Text color inside `pre > code` blocks.
    pub code_color: String,
    /// Text color of inline `code` spans.
    pub inline_code_color: String,
    pub background: String,
    entries: Vec<ThemeEntry>,
}

impl Theme {
    /// Theme with page colors and no category entries.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code_color: "#ccc".to_string(),
            inline_code_color: "#bf616a".to_string(),
            background: "#2e3440".to_string(),
            entries: Vec::new(),
        }
    }

    /// Nord-style dark theme used by the documentation site.
    #[must_use]
    pub fn nord() -> Self {
        Self::new("nord")
            .with_entry(ThemeEntry::new("comment", "#616e88", Color::Color256(244)))
            .with_entry(ThemeEntry::new("class-name", "#ebcb8b", Color::Yellow))
            .with_entry(ThemeEntry::new("keyword", "#81a1c1", Color::Blue).bold())
            .with_entry(ThemeEntry::new("important", "#d08770", Color::Red).bold())
            .with_entry(ThemeEntry::new("tag", "#a3be8c", Color::Green))
            .with_entry(ThemeEntry::new("operator", "#88c0d0", Color::Cyan))
            .with_entry(ThemeEntry::new("number", "#b48ead", Color::Magenta))
    }

    /// No category colors; only the page colors apply.
    #[must_use]
    pub fn plain() -> Self {
        Self::new("plain")
    }

    /// Add or replace the entry for a category.
    #[must_use]
    pub fn with_entry(mut self, entry: ThemeEntry) -> Self {
        self.entries.retain(|e| e.category != entry.category);
        self.entries.push(entry);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, category: &str) -> Option<&ThemeEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Terminal style for a category (unstyled if the theme has no entry).
    #[must_use]
    pub fn ansi_style(&self, category: &str) -> Style {
        let Some(entry) = self.entry(category) else {
            return Style::new();
        };
        let style = Style::new().fg(entry.ansi);
        if entry.bold { style.bold() } else { style }
    }

    /// Stylesheet for Prism-style markup (`.token.<category>`).
    #[must_use]
    pub fn css(&self) -> String {
        let mut css = String::new();
        let _ = writeln!(
            css,
            "pre[class*=\"language-\"] > code, code[class*=\"language-\"] {{ color: {}; }}",
            self.code_color
        );
        let _ = writeln!(
            css,
            "pre[class*=\"language-\"] {{ background: {}; padding: 1em; overflow: auto; }}",
            self.background
        );
        let _ = writeln!(css, ":not(pre) > code {{ color: {}; }}", self.inline_code_color);
        for entry in &self.entries {
            let weight = if entry.bold { " font-weight: bold;" } else { "" };
            let _ = writeln!(
                css,
                ".token.{} {{ color: {};{} }}",
                entry.category, entry.css, weight
            );
        }
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::nord()
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nord" => Ok(Self::nord()),
            "plain" => Ok(Self::plain()),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}
