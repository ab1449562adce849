//! # inkpress
//!
//! A minimal static site generator for a directory of markdown articles.
//! Each article carries YAML frontmatter; the build turns them into one page
//! per article, an index page and an archive listing.
//!
//! # Architecture: One Linear Pass
//!
//! A build is a single synchronous pass with no caching and no incremental
//! state. The output directory is wiped and regenerated every time:
//!
//! ```text
//! 1. Clean     docs/ reset, CNAME + assets/ copied in
//! 2. Collect   content/*.md  →  Vec<Article>     (filename order, descending)
//! 3. Render    article.html  →  docs/articles/<slug>.html
//!              index.html    →  docs/index.html
//!              archive.html  →  docs/articles/index.html
//! ```
//!
//! Regenerating from scratch keeps the output a pure function of the inputs:
//! running the build twice on unchanged content yields byte-identical files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Build driver: owns config, converter and templates; runs the stages |
//! | [`clean`] | Stage 1: resets the output directory, copies `CNAME` and assets |
//! | [`collect`] | Stage 2: enumerates sources, applies the title/date validation gate |
//! | [`document`] | Frontmatter split, YAML metadata, markdown body |
//! | [`slug`] | Title → slug derivation with a configurable strip set |
//! | [`markdown`] | pulldown-cmark wrapper with configurable extensions |
//! | [`render`] | Stage 3: tera templates for article, index and archive pages |
//! | [`config`] | `site.toml` loading and validation |
//! | [`types`] | The [`types::Article`] record shared by all stages |
//! | [`output`] | CLI output formatting for build and check results |
//!
//! # Design Decisions
//!
//! ## Lenient Validation Gate
//!
//! A document missing `title` or `date` is skipped, not rejected. Drafts can
//! live in the content directory until they are dated. Malformed frontmatter,
//! on the other hand, aborts the build: it is almost always a typo.
//!
//! ## Templates on Disk
//!
//! Pages are rendered with [tera](https://keats.github.io/tera/) templates
//! loaded from the project's `templates/` directory, so the site's look is
//! edited without rebuilding the binary.
//!
//! ## No Global State
//!
//! The markdown converter and template set are fields of [`site::Site`],
//! built once from the config. Tests build many independent sites in one
//! process.

pub mod clean;
pub mod collect;
pub mod config;
pub mod document;
pub mod markdown;
pub mod output;
pub mod render;
pub mod site;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
