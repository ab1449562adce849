//! Page rendering with named tera templates.
//!
//! Three pages are produced from the collected articles:
//!
//! | Page | Template | Context | Output |
//! |------|----------|---------|--------|
//! | Article | `article.html` | `article` | `articles/<slug>.html` |
//! | Index | `index.html` | `articles` | `index.html` |
//! | Archive | `archive.html` | `articles` | `articles/index.html` |
//!
//! Each article in a context exposes `title`, `date`, `summary`, `slug` and
//! `content`. Templates ending in `.html` are autoescaped, so the rendered
//! body must be embedded with `{{ article.content | safe }}`.
//!
//! A missing template, or a template referencing a field the context does not
//! have, fails the render.

use crate::config::TemplateConfig;
use crate::types::Article;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;
use walkdir::WalkDir;

/// Subdirectory of the output root holding article pages and the archive.
pub const ARTICLES_DIR: &str = "articles";

/// Archive page path relative to the output root. No article slug may map
/// onto it.
pub fn archive_page_path() -> String {
    format!("{ARTICLES_DIR}/index.html")
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template {name}: {source}")]
    Template { name: String, source: tera::Error },
    #[error("failed to load templates from {dir}: {source}")]
    Load { dir: PathBuf, source: tera::Error },
    #[error("failed to list templates in {dir}: {source}")]
    List {
        dir: PathBuf,
        source: walkdir::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Loaded templates plus the names used for each page kind.
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
    article: String,
    index: String,
    archive: String,
}

impl Templates {
    /// Load every file under `dir` as a template, named by its path relative
    /// to `dir`. A missing directory loads nothing; rendering then fails on
    /// the first lookup.
    pub fn load(dir: &Path, config: &TemplateConfig) -> Result<Self, RenderError> {
        if !dir.is_dir() {
            log::warn!("template directory {} does not exist", dir.display());
            return Ok(Self::with_tera(Tera::default(), config));
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|source| RenderError::List {
                dir: dir.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(dir) else {
                continue;
            };
            files.push((entry.path().to_path_buf(), Some(template_name(rel))));
        }

        let mut tera = Tera::default();
        tera.add_template_files(files)
            .map_err(|source| RenderError::Load {
                dir: dir.to_path_buf(),
                source,
            })?;
        log::debug!(
            "loaded templates from {}: {:?}",
            dir.display(),
            tera.get_template_names().collect::<Vec<_>>()
        );
        Ok(Self::with_tera(tera, config))
    }

    /// Build from in-memory `(name, source)` pairs.
    pub fn from_raw(
        templates: &[(&str, &str)],
        config: &TemplateConfig,
    ) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.to_vec())
            .map_err(|source| RenderError::Load {
                dir: PathBuf::new(),
                source,
            })?;
        Ok(Self::with_tera(tera, config))
    }

    fn with_tera(tera: Tera, config: &TemplateConfig) -> Self {
        Self {
            tera,
            article: config.article.clone(),
            index: config.index.clone(),
            archive: config.archive.clone(),
        }
    }

    fn render(&self, name: &str, context: &Context) -> Result<String, RenderError> {
        self.tera
            .render(name, context)
            .map_err(|source| RenderError::Template {
                name: name.to_string(),
                source,
            })
    }

    /// Render the article template for one article.
    pub fn render_article(&self, article: &Article) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("article", article);
        self.render(&self.article, &context)
    }

    /// Render the index template for the full article list.
    pub fn render_index(&self, articles: &[Article]) -> Result<String, RenderError> {
        self.render(&self.index, &list_context(articles))
    }

    /// Render the archive template for the full article list.
    pub fn render_archive(&self, articles: &[Article]) -> Result<String, RenderError> {
        self.render(&self.archive, &list_context(articles))
    }
}

/// Template name for a path relative to the template directory, always
/// `/`-separated.
fn template_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn list_context(articles: &[Article]) -> Context {
    let mut context = Context::new();
    context.insert("articles", articles);
    context
}

fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    let write_err = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, html).map_err(write_err)
}

/// Write one page per article to `<output>/articles/<slug>.html`.
///
/// Returns the written paths in article order.
pub fn render_article_pages(
    templates: &Templates,
    articles: &[Article],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, RenderError> {
    let mut written = Vec::with_capacity(articles.len());
    for article in articles {
        let path = output_dir.join(article.page_path());
        write_page(&path, &templates.render_article(article)?)?;
        written.push(path);
    }
    log::info!("rendered {} article pages", written.len());
    Ok(written)
}

/// Write `<output>/index.html`.
pub fn render_index(
    templates: &Templates,
    articles: &[Article],
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let path = output_dir.join("index.html");
    write_page(&path, &templates.render_index(articles)?)?;
    Ok(path)
}

/// Write `<output>/articles/index.html`.
pub fn render_archive(
    templates: &Templates,
    articles: &[Article],
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let path = output_dir.join(archive_page_path());
    write_page(&path, &templates.render_archive(articles)?)?;
    Ok(path)
}
