//! Markdown to HTML conversion.
//!
//! A thin wrapper over pulldown-cmark. The converter is an ordinary value
//! built from [`MarkdownConfig`] at site construction and passed to whatever
//! needs it, so two sites in one process never share parser state.

use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};

/// CommonMark extensions, all off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// GitHub-style pipe tables.
    pub tables: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// `- [ ]` task list items.
    pub tasklists: bool,
    /// `[^1]` footnotes.
    pub footnotes: bool,
    /// Curly quotes, en/em dashes and ellipses.
    pub smart_punctuation: bool,
}

impl MarkdownConfig {
    fn options(&self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);
        options
    }
}

/// Converts markdown bodies to HTML with a fixed set of parser options.
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    options: Options,
}

impl MarkdownConverter {
    pub fn new(config: &MarkdownConfig) -> Self {
        Self {
            options: config.options(),
        }
    }

    /// Render `markdown` to an HTML fragment.
    pub fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}
