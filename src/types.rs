//! Shared types passed between pipeline stages.
//!
//! [`Article`] is the only record the pipeline produces. It is serialized into
//! template contexts, so its field names are part of the template contract.

use serde::Serialize;
use std::path::PathBuf;

/// One published article, built from a source document with both `title` and
/// `date` in its frontmatter.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// Title from frontmatter, rendered to text.
    pub title: String,
    /// Date from frontmatter, passed to templates untouched.
    pub date: serde_yaml_ng::Value,
    /// Summary from frontmatter, empty when absent.
    pub summary: String,
    /// Filename stem and link target, derived from `title`.
    pub slug: String,
    /// Body converted to HTML.
    pub content: String,
    /// Source file; reporting only, not visible to templates.
    #[serde(skip)]
    pub source: PathBuf,
}

impl Article {
    /// Output path relative to the output root.
    pub fn page_path(&self) -> String {
        format!("{}/{}.html", crate::render::ARTICLES_DIR, self.slug)
    }
}
