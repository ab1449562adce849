//! Shared test utilities for the inkpress test suite.
//!
//! Provides fixture setup, in-memory templates, article builders and lookup
//! helpers that panic with a clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let site = Site::open(tmp.path()).unwrap();
//! let collection = site.check().unwrap();
//!
//! let article = find_article(&collection.articles, "hello-world!");
//! assert_eq!(article.title, "Hello, World!");
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::TemplateConfig;
use crate::render::Templates;
use crate::slug::slugify;
use crate::types::Article;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    crate::clean::copy_tree(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Write a source document with the given frontmatter and body.
pub fn write_doc(dir: &Path, name: &str, frontmatter: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("---\n{frontmatter}\n---\n{body}")).unwrap();
    path
}

// =========================================================================
// Templates
// =========================================================================

/// Minimal templates covering every page kind.
pub const TEST_TEMPLATES: [(&str, &str); 3] = [
    (
        "article.html",
        "<title>{{ article.title }}</title>\n<time>{{ article.date }}</time>\n{{ article.content | safe }}\n",
    ),
    (
        "index.html",
        "<p>{{ articles | length }} articles</p>\n{% for a in articles %}<a href=\"articles/{{ a.slug }}.html\">{{ a.title }}</a>\n{% endfor %}",
    ),
    (
        "archive.html",
        "<h1>Archive</h1>\n{% for a in articles %}<li>{{ a.date }} {{ a.title }}</li>\n{% endfor %}",
    ),
];

/// [`TEST_TEMPLATES`] loaded with the default template names.
pub fn test_templates() -> Templates {
    Templates::from_raw(&TEST_TEMPLATES, &TemplateConfig::default()).unwrap()
}

// =========================================================================
// Articles
// =========================================================================

/// An article with a fixed date and the default slug for `title`.
pub fn sample_article(title: &str, content: &str) -> Article {
    Article {
        title: title.to_string(),
        date: serde_yaml_ng::Value::String("2024-01-01".to_string()),
        summary: String::new(),
        slug: slugify(title),
        content: content.to_string(),
        source: PathBuf::from(format!("{}.md", slugify(title))),
    }
}

/// Find an article by slug. Panics if not found.
pub fn find_article<'a>(articles: &'a [Article], slug: &str) -> &'a Article {
    articles.iter().find(|a| a.slug == slug).unwrap_or_else(|| {
        let slugs = article_slugs(articles);
        panic!("article '{slug}' not found. Available: {slugs:?}")
    })
}

/// All slugs in collection order.
pub fn article_slugs(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.slug.as_str()).collect()
}
