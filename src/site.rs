//! Build orchestration.
//!
//! A [`Site`] is the single initialization point for a build: it owns the
//! configuration, the markdown converter, the slug rules and the loaded
//! templates. Nothing is global, so independent sites can be built one after
//! another in the same process.
//!
//! [`Site::build`] runs the stages in a fixed order and stops at the first
//! failure:
//!
//! ```text
//! 1. Clean      docs/ removed, recreated, CNAME + assets copied
//! 2. Collect    content/*.md → Vec<Article>
//! 3. Articles   docs/articles/<slug>.html
//! 4. Index      docs/index.html
//! 5. Archive    docs/articles/index.html
//! ```

use crate::clean::{self, CleanError, CleanReport};
use crate::collect::{self, CollectError, Collection};
use crate::config::{self, ConfigError, SiteConfig};
use crate::markdown::MarkdownConverter;
use crate::render::{self, RenderError, Templates};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Clean error: {0}")]
    Clean(#[from] CleanError),
    #[error("Collect error: {0}")]
    Collect(#[from] CollectError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Everything a completed build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub clean: CleanReport,
    pub collection: Collection,
    pub article_pages: Vec<PathBuf>,
    pub index_page: PathBuf,
    pub archive_page: PathBuf,
}

/// A configured project, ready to build.
#[derive(Debug)]
pub struct Site {
    root: PathBuf,
    config: SiteConfig,
    markdown: MarkdownConverter,
    templates: Templates,
}

impl Site {
    /// Prepare a site rooted at `root`. Templates are loaded here, so a
    /// broken template fails before the output directory is touched.
    pub fn new(root: &Path, config: SiteConfig) -> Result<Self, BuildError> {
        config.validate()?;
        let templates = Templates::load(&config.templates_path(root), &config.templates)?;
        Ok(Self::with_templates(root, config, templates))
    }

    /// Prepare a site from `site.toml` in `root` (defaults if absent).
    pub fn open(root: &Path) -> Result<Self, BuildError> {
        let config = config::load_config(root)?;
        Self::new(root, config)
    }

    /// Prepare a site with templates supplied by the caller.
    pub fn with_templates(root: &Path, config: SiteConfig, templates: Templates) -> Self {
        let markdown = MarkdownConverter::new(&config.markdown);
        Self {
            root: root.to_path_buf(),
            config,
            markdown,
            templates,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn output_dir(&self) -> PathBuf {
        self.config.output_path(&self.root)
    }

    /// Collect articles without touching the output directory.
    pub fn check(&self) -> Result<Collection, BuildError> {
        Ok(collect::collect(
            &self.config.content_path(&self.root),
            &self.config.source_extension,
            &self.markdown,
            &self.config.slug,
        )?)
    }

    /// Run the full pipeline.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let output_dir = self.output_dir();

        let clean = clean::clean_output(
            &output_dir,
            &self.config.cname_path(&self.root),
            &self.config.assets_path(&self.root),
        )?;

        let collection = self.check()?;

        let article_pages =
            render::render_article_pages(&self.templates, &collection.articles, &output_dir)?;
        let index_page = render::render_index(&self.templates, &collection.articles, &output_dir)?;
        let archive_page =
            render::render_archive(&self.templates, &collection.articles, &output_dir)?;

        log::info!("built {}", output_dir.display());
        Ok(BuildReport {
            output_dir,
            clean,
            collection,
            article_pages,
            index_page,
            archive_page,
        })
    }
}
