//! Content collection: source files → ordered article records.
//!
//! Every file with the source extension directly inside the content directory
//! is parsed. Files are visited in descending filename order, which is also
//! the order of the resulting list. Content directories conventionally name
//! files by date (`2024-01-01-hello.md`), so this approximates newest-first.
//!
//! ## Validation Gate
//!
//! A document lacking `title` or `date` is dropped and the batch continues.
//! Drops are recorded in [`Collection::skipped`] for reporting; they are not
//! errors. Parse failures (unreadable file, malformed frontmatter) are errors
//! and abort the collection.
//!
//! Two articles whose titles produce the same slug would write the same page,
//! so the collision is reported as an error naming both sources. The same
//! holds for a slug whose page would land on the archive page.

use crate::document::{self, ParseError, ParsedDocument};
use crate::markdown::MarkdownConverter;
use crate::render;
use crate::slug::SlugRules;
use crate::types::Article;
use serde_yaml_ng::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("failed to read content directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("slug \"{slug}\" produced by both {} and {}", .first.display(), .second.display())]
    SlugCollision {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("slug \"{slug}\" from {} would be written outside the articles directory", .source_path.display())]
    UnsafeSlug { slug: String, source_path: PathBuf },
    #[error("slug \"{slug}\" from {} would overwrite the archive page", .source_path.display())]
    ReservedSlug { slug: String, source_path: PathBuf },
}

/// A source document dropped by the validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub source: PathBuf,
    /// Required fields that were absent, in `title`, `date` order.
    pub missing: Vec<&'static str>,
}

/// Result of collecting a content directory.
#[derive(Debug, Default)]
pub struct Collection {
    pub articles: Vec<Article>,
    pub skipped: Vec<Skipped>,
}

/// List source files directly inside `dir` with the given extension, sorted
/// by filename descending. Names starting with a dot are included.
pub fn source_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CollectError> {
    let io_err = |source| CollectError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let matches = path.extension().is_some_and(|ext| ext == extension);
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    Ok(files)
}

/// Render a scalar frontmatter value as text. Sequences, mappings and null
/// have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// A slug is safe when joining it under `articles/` stays under `articles/`.
fn is_safe_slug(slug: &str) -> bool {
    Path::new(slug)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Build an article from a parsed document, or report which required
/// fields are missing.
fn build_article(
    doc: ParsedDocument,
    source: &Path,
    slug_rules: &SlugRules,
) -> Result<Article, Skipped> {
    let title = doc.field("title").and_then(scalar_text);
    let date = doc.field("date").cloned();

    let (title, date) = match (title, date) {
        (Some(title), Some(date)) => (title, date),
        (title, date) => {
            let mut missing = Vec::new();
            if title.is_none() {
                missing.push("title");
            }
            if date.is_none() {
                missing.push("date");
            }
            return Err(Skipped {
                source: source.to_path_buf(),
                missing,
            });
        }
    };

    let summary = doc.field("summary").and_then(scalar_text).unwrap_or_default();
    let slug = slug_rules.slugify(&title);

    Ok(Article {
        title,
        date,
        summary,
        slug,
        content: doc.html,
        source: source.to_path_buf(),
    })
}

/// Collect all valid articles from `content_dir`.
pub fn collect(
    content_dir: &Path,
    extension: &str,
    markdown: &MarkdownConverter,
    slug_rules: &SlugRules,
) -> Result<Collection, CollectError> {
    let mut collection = Collection::default();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in source_files(content_dir, extension)? {
        let doc = document::parse_document(&path, markdown)?;
        let article = match build_article(doc, &path, slug_rules) {
            Ok(article) => article,
            Err(skipped) => {
                log::debug!(
                    "skipping {}: missing {}",
                    path.display(),
                    skipped.missing.join(", ")
                );
                collection.skipped.push(skipped);
                continue;
            }
        };

        if !is_safe_slug(&article.slug) {
            return Err(CollectError::UnsafeSlug {
                slug: article.slug,
                source_path: path,
            });
        }
        if Path::new(&article.page_path()) == Path::new(&render::archive_page_path()) {
            return Err(CollectError::ReservedSlug {
                slug: article.slug,
                source_path: path,
            });
        }
        if let Some(first) = seen.get(&article.slug) {
            return Err(CollectError::SlugCollision {
                slug: article.slug,
                first: first.clone(),
                second: path,
            });
        }
        seen.insert(article.slug.clone(), path.clone());

        log::debug!("collected {} as {}", path.display(), article.slug);
        collection.articles.push(article);
    }

    log::info!(
        "collected {} articles ({} skipped) from {}",
        collection.articles.len(),
        collection.skipped.len(),
        content_dir.display()
    );
    Ok(collection)
}
