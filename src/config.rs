//! Site configuration module.
//!
//! Handles loading and validating `site.toml` from the project root. The file
//! is optional; every key has a default, and a partial file overrides only the
//! keys it names.
//!
//! ## Project Layout
//!
//! All paths in the config are relative to the project root:
//!
//! ```text
//! project/
//! ├── site.toml        # This file (optional)
//! ├── CNAME            # Copied to the output root (optional)
//! ├── content/         # Markdown articles with YAML frontmatter
//! ├── templates/       # article.html, index.html, archive.html
//! ├── assets/          # Mirrored to docs/assets (optional)
//! └── docs/            # Output, wiped and regenerated on every build
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_dir = "content"
//! output_dir = "docs"
//! assets_dir = "assets"
//! cname_file = "CNAME"
//! source_extension = "md"
//!
//! [templates]
//! dir = "templates"
//! article = "article.html"
//! index = "index.html"
//! archive = "archive.html"
//!
//! [slug]
//! strip = ",'.?"           # Characters deleted from slugs
//! separator = "-"          # Replaces spaces
//!
//! [markdown]
//! tables = false
//! strikethrough = false
//! tasklists = false
//! footnotes = false
//! smart_punctuation = false
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::markdown::MarkdownConfig;
use crate::slug::SlugRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Config file name looked up in the project root.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding source documents.
    pub content_dir: String,
    /// Output directory. Removed and recreated on every build.
    pub output_dir: String,
    /// Static files mirrored to `<output>/assets`.
    pub assets_dir: String,
    /// Domain-pinning file copied to `<output>/CNAME`.
    pub cname_file: String,
    /// Extension (without dot) of source documents.
    pub source_extension: String,
    pub templates: TemplateConfig,
    pub slug: SlugRules,
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            output_dir: "docs".to_string(),
            assets_dir: "assets".to_string(),
            cname_file: "CNAME".to_string(),
            source_extension: "md".to_string(),
            templates: TemplateConfig::default(),
            slug: SlugRules::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

/// Template directory and the template name used for each page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    pub dir: String,
    pub article: String,
    pub index: String,
    pub archive: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
            article: "article.html".to_string(),
            index: "index.html".to_string(),
            archive: "archive.html".to_string(),
        }
    }
}

/// Normalize a relative path for comparison: drop `.` components.
fn normalized(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl SiteConfig {
    /// Validate config values. The output directory gets the strictest
    /// checks because the build deletes it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let output = normalized(&self.output_dir);
        if output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty or the project root".into(),
            ));
        }
        if Path::new(&self.output_dir).is_absolute()
            || output.components().any(|c| c == Component::ParentDir)
        {
            return Err(ConfigError::Validation(
                "output_dir must be a relative path inside the project".into(),
            ));
        }
        for (key, other) in [
            ("content_dir", &self.content_dir),
            ("assets_dir", &self.assets_dir),
            ("templates.dir", &self.templates.dir),
        ] {
            let other = normalized(other);
            if other.starts_with(&output) {
                return Err(ConfigError::Validation(format!(
                    "output_dir must not contain {key}"
                )));
            }
        }
        if self.source_extension.is_empty() || self.source_extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "source_extension must be non-empty, without a leading dot".into(),
            ));
        }
        if self.slug.separator.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "slug.separator must not contain path separators".into(),
            ));
        }
        for (key, name) in [
            ("templates.article", &self.templates.article),
            ("templates.index", &self.templates.index),
            ("templates.archive", &self.templates.archive),
        ] {
            if name.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn content_path(&self, root: &Path) -> PathBuf {
        root.join(&self.content_dir)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    pub fn assets_path(&self, root: &Path) -> PathBuf {
        root.join(&self.assets_dir)
    }

    pub fn cname_path(&self, root: &Path) -> PathBuf {
        root.join(&self.cname_file)
    }

    pub fn templates_path(&self, root: &Path) -> PathBuf {
        root.join(&self.templates.dir)
    }
}

/// Load and validate a config file. Returns defaults if the file does not
/// exist.
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Load `site.toml` from the project root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_file(&root.join(CONFIG_FILE))
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# inkpress configuration
# =====================
# All keys are optional. Paths are relative to the project root (the
# directory holding this file). Unknown keys are rejected.

# Directory of markdown articles. Only files directly inside it are read.
content_dir = "content"

# Output directory. It is DELETED and regenerated on every build.
output_dir = "docs"

# Static files mirrored to <output_dir>/assets. Skipped if missing.
assets_dir = "assets"

# Domain-pinning file copied to <output_dir>/CNAME. Skipped if missing.
cname_file = "CNAME"

# Extension of source documents, without the dot.
source_extension = "md"

# ---------------------------------------------------------------------------
# Templates (tera syntax)
# ---------------------------------------------------------------------------
# article.html gets `article`; index.html and archive.html get `articles`.
# Each article has title, date, summary, slug and content. Embed the body
# with {{ article.content | safe }}.
[templates]
dir = "templates"
article = "article.html"
index = "index.html"
archive = "archive.html"

# ---------------------------------------------------------------------------
# Slugs
# ---------------------------------------------------------------------------
# Titles are lowercased, spaces become `separator`, and every character in
# `strip` is deleted. Other characters are kept as-is.
[slug]
strip = ",'.?"
separator = "-"

# ---------------------------------------------------------------------------
# Markdown extensions (CommonMark core is always on)
# ---------------------------------------------------------------------------
[markdown]
tables = false
strikethrough = false
tasklists = false
footnotes = false
smart_punctuation = false
"##
}
