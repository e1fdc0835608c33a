//! Highlight fenced code blocks in markdown documents.
//!
//! Fences follow `CommonMark`: three or more backticks or tildes, indented by
//! at most three spaces, closed by a fence of the same character that is at
//! least as long. An unclosed fence runs to the end of the document. Blocks
//! whose info string names a registered language are replaced by HTML;
//! everything else is copied through unchanged.

use std::ops::Range;
use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;
use rvhl_grammar::LanguageRegistry;
use tracing::{debug, trace};

use crate::render::{HtmlOptions, HtmlRenderer, Renderer};
use crate::{Theme, tokenize};

/// Markdown pass configuration.
#[derive(Clone, Debug)]
pub struct MarkdownOptions {
    pub theme: Theme,
    /// Highlight blocks on the rayon thread pool.
    pub parallel: bool,
}

impl MarkdownOptions {
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            parallel: true,
        }
    }
}

/// Result of a markdown pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkdownOutput {
    pub text: String,
    /// Blocks replaced with highlighted HTML.
    pub highlighted: usize,
    /// Fenced blocks left alone (no language, or language not registered).
    pub skipped: usize,
}

#[derive(Debug)]
struct FencedBlock {
    /// Whole block including fences.
    span: Range<usize>,
    language: String,
    /// Content with up to `indent` leading spaces removed per line.
    body: String,
}

/// Replace fenced code blocks in registered languages with highlighted HTML.
#[must_use]
pub fn highlight_markdown(
    registry: &LanguageRegistry,
    source: &str,
    options: &MarkdownOptions,
) -> MarkdownOutput {
    let blocks = find_fenced_blocks(source);
    let (known, unknown): (Vec<_>, Vec<_>) = blocks
        .into_iter()
        .partition(|block| registry.contains(&block.language));

    let render = |block: &FencedBlock| -> String {
        let Some(language) = registry.get(&block.language) else {
            return source[block.span.clone()].to_string();
        };
        let tokens = tokenize(&language.grammar, &block.body);
        let renderer = HtmlRenderer::new(
            HtmlOptions::new(block.language.clone()),
            options.theme.clone(),
        );
        renderer.render(&tokens)
    };
    let rendered: Vec<String> = if options.parallel {
        known.par_iter().map(render).collect()
    } else {
        known.iter().map(render).collect()
    };

    let mut text = String::with_capacity(source.len());
    let mut cursor = 0;
    for (block, html) in known.iter().zip(&rendered) {
        text.push_str(&source[cursor..block.span.start]);
        text.push_str(html);
        cursor = block.span.end;
    }
    text.push_str(&source[cursor..]);

    debug!(
        highlighted = known.len(),
        skipped = unknown.len(),
        "highlighted markdown"
    );
    MarkdownOutput {
        text,
        highlighted: known.len(),
        skipped: unknown.len(),
    }
}

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"^( {0,3})(`{3,}|~{3,})[ \t]*([^\s`]*)").expect("fence pattern is valid")
    })
}

/// Locate fenced code blocks in document order.
fn find_fenced_blocks(source: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut lines = line_spans(source).peekable();

    while let Some(open) = lines.next() {
        let line = &source[open.clone()];
        let Some(caps) = fence_pattern().captures(line) else {
            continue;
        };
        let indent = caps[1].len();
        let fence = &caps[2];
        let fence_char = fence.as_bytes()[0];
        // Backtick fences may not have backticks in the info string.
        if fence_char == b'`' && line[caps[0].len()..].contains('`') {
            continue;
        }
        let language = caps[3].to_ascii_lowercase();

        let mut body = String::new();
        let mut end = source.len();
        for inner in lines.by_ref() {
            let content = &source[inner.clone()];
            if is_closing_fence(content, fence_char, fence.len()) {
                end = inner.end;
                break;
            }
            body.push_str(strip_indent(content, indent));
        }

        trace!(language = %language, start = open.start, end, "fenced block");
        blocks.push(FencedBlock {
            span: open.start..end,
            language,
            body,
        });
    }
    blocks
}

/// Byte ranges of lines, each including its terminator.
fn line_spans(source: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut start = 0;
    source.split_inclusive('\n').map(move |line| {
        let span = start..start + line.len();
        start = span.end;
        span
    })
}

fn is_closing_fence(line: &str, fence_char: u8, min_len: usize) -> bool {
    let trimmed = line.trim_end_matches(['\n', '\r']);
    let leading = trimmed.len() - trimmed.trim_start_matches(' ').len();
    if leading > 3 {
        return false;
    }
    let rest = &trimmed[leading..];
    let run = rest.bytes().take_while(|&b| b == fence_char).count();
    run >= min_len && rest[run..].trim().is_empty()
}

fn strip_indent(line: &str, indent: usize) -> &str {
    let leading = line.len() - line.trim_start_matches(' ').len();
    &line[leading.min(indent)..]
}
