//! Output directory reset and static passthrough files.
//!
//! Every build starts from an empty output directory. After the reset, two
//! optional inputs from the project root are copied in verbatim:
//!
//! ```text
//! CNAME          → docs/CNAME
//! assets/**      → docs/assets/**
//! ```
//!
//! Nothing here attempts recovery: if removal succeeds but a copy fails, the
//! previous build is already gone.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Subdirectory of the output root that receives the assets mirror.
pub const ASSETS_DIR: &str = "assets";

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("failed to reset output directory {path}: {source}")]
    Reset {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to walk assets directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What the cleaner placed into the fresh output directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub cname_copied: bool,
    /// Number of asset files mirrored.
    pub assets_copied: usize,
}

/// Remove `output_dir` if present and recreate it empty.
pub fn reset_dir(output_dir: &Path) -> Result<(), CleanError> {
    let reset_err = |source| CleanError::Reset {
        path: output_dir.to_path_buf(),
        source,
    };
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(reset_err)?;
    }
    fs::create_dir_all(output_dir).map_err(reset_err)
}

fn copy_file(from: &Path, to: &Path) -> Result<(), CleanError> {
    fs::copy(from, to).map(|_| ()).map_err(|source| CleanError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn create_dir(dir: &Path, src: &Path) -> Result<(), CleanError> {
    fs::create_dir_all(dir).map_err(|source| CleanError::Copy {
        from: src.to_path_buf(),
        to: dir.to_path_buf(),
        source,
    })
}

/// Mirror `src` into `dst` recursively. Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, CleanError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        // WalkDir yields paths rooted at `src`.
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            create_dir(&target, entry.path())?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Reset the output directory and copy passthrough files into it.
///
/// `cname_file` and `assets_dir` are optional inputs: when they do not exist
/// they are silently ignored.
pub fn clean_output(
    output_dir: &Path,
    cname_file: &Path,
    assets_dir: &Path,
) -> Result<CleanReport, CleanError> {
    reset_dir(output_dir)?;
    let mut report = CleanReport::default();

    if cname_file.is_file() {
        copy_file(cname_file, &output_dir.join("CNAME"))?;
        report.cname_copied = true;
    }

    if assets_dir.is_dir() {
        report.assets_copied = copy_tree(assets_dir, &output_dir.join(ASSETS_DIR))?;
    }

    log::info!(
        "reset {} (cname: {}, assets: {})",
        output_dir.display(),
        report.cname_copied,
        report.assets_copied
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_output_dir() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");

        clean_output(&out, &tmp.path().join("CNAME"), &tmp.path().join("assets")).unwrap();
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn removes_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        fs::create_dir_all(out.join("articles")).unwrap();
        fs::write(out.join("articles/stale.html"), "old").unwrap();
        fs::write(out.join("index.html"), "old").unwrap();

        clean_output(&out, &tmp.path().join("CNAME"), &tmp.path().join("assets")).unwrap();
        assert!(!out.join("articles").exists());
        assert!(!out.join("index.html").exists());
    }

    #[test]
    fn copies_cname_verbatim() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        fs::write(tmp.path().join("CNAME"), "blog.example.com\n").unwrap();

        let report =
            clean_output(&out, &tmp.path().join("CNAME"), &tmp.path().join("assets")).unwrap();
        assert!(report.cname_copied);
        assert_eq!(
            fs::read_to_string(out.join("CNAME")).unwrap(),
            "blog.example.com\n"
        );
    }

    #[test]
    fn mirrors_assets_recursively() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("css")).unwrap();
        fs::create_dir_all(assets.join("img/icons")).unwrap();
        fs::write(assets.join("css/site.css"), "body {}").unwrap();
        fs::write(assets.join("img/icons/dot.svg"), "<svg/>").unwrap();
        fs::write(assets.join("robots.txt"), "User-agent: *").unwrap();

        let report = clean_output(&out, &tmp.path().join("CNAME"), &assets).unwrap();
        assert_eq!(report.assets_copied, 3);
        assert!(!report.cname_copied);
        assert_eq!(
            fs::read_to_string(out.join("assets/css/site.css")).unwrap(),
            "body {}"
        );
        assert!(out.join("assets/img/icons/dot.svg").is_file());
        assert!(out.join("assets/robots.txt").is_file());
    }

    #[test]
    fn empty_assets_dir_is_mirrored_empty() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        fs::create_dir(tmp.path().join("assets")).unwrap();

        let report =
            clean_output(&out, &tmp.path().join("CNAME"), &tmp.path().join("assets")).unwrap();
        assert_eq!(report.assets_copied, 0);
        assert!(out.join("assets").is_dir());
    }

    #[test]
    fn running_twice_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        fs::write(tmp.path().join("CNAME"), "example.org").unwrap();

        let first =
            clean_output(&out, &tmp.path().join("CNAME"), &tmp.path().join("assets")).unwrap();
        let second =
            clean_output(&out, &tmp.path().join("CNAME"), &tmp.path().join("assets")).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(out.join("CNAME")).unwrap(), "example.org");
    }
}
