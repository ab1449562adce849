//! CLI output formatting for builds and checks.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each article leads
//! with its positional index and title; source and output paths follow as
//! indented context lines. Skipped documents are listed with the fields they
//! lacked, so silent filtering is still visible to the person running a build.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Articles
//! 001 Hello, World!
//!     Source: 2024-01-01-hello.md
//!     Slug: hello-world!
//!
//! Skipped
//!     draft.md (missing date)
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Archive → articles/index.html
//! 001 Hello, World! → articles/hello-world!.html
//!
//! Static
//!     CNAME
//!     assets/ (3 files)
//!
//! Generated 1 article page, skipped 1 document
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::collect::{Collection, Skipped};
use crate::site::BuildReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Display a path relative to `base` when possible.
fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn skipped_line(skipped: &Skipped) -> String {
    format!(
        "    {} (missing {})",
        file_name(&skipped.source),
        skipped.missing.join(", ")
    )
}

fn push_skipped(lines: &mut Vec<String>, skipped: &[Skipped]) {
    if skipped.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push("Skipped".to_string());
    lines.extend(skipped.iter().map(skipped_line));
}

/// Format the result of a content check.
pub fn format_check_output(collection: &Collection) -> Vec<String> {
    let mut lines = vec!["Articles".to_string()];

    if collection.articles.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, article) in collection.articles.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), article.title));
        lines.push(format!("    Source: {}", file_name(&article.source)));
        lines.push(format!("    Slug: {}", article.slug));
    }

    push_skipped(&mut lines, &collection.skipped);
    lines
}

/// Print check output to stdout.
pub fn print_check_output(collection: &Collection) {
    for line in format_check_output(collection) {
        println!("{}", line);
    }
}

/// Format the result of a full build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let out = &report.output_dir;
    let mut lines = vec![
        format!("Home \u{2192} {}", relative(&report.index_page, out)),
        format!("Archive \u{2192} {}", relative(&report.archive_page, out)),
    ];

    for (i, (article, page)) in report
        .collection
        .articles
        .iter()
        .zip(&report.article_pages)
        .enumerate()
    {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            article.title,
            relative(page, out)
        ));
    }

    if report.clean.cname_copied || report.clean.assets_copied > 0 {
        lines.push(String::new());
        lines.push("Static".to_string());
        if report.clean.cname_copied {
            lines.push("    CNAME".to_string());
        }
        if report.clean.assets_copied > 0 {
            lines.push(format!(
                "    {}/ ({})",
                crate::clean::ASSETS_DIR,
                plural(report.clean.assets_copied, "file", "files")
            ));
        }
    }

    push_skipped(&mut lines, &report.collection.skipped);

    lines.push(String::new());
    let mut summary = format!(
        "Generated {}",
        plural(report.article_pages.len(), "article page", "article pages")
    );
    if !report.collection.skipped.is_empty() {
        summary.push_str(&format!(
            ", skipped {}",
            plural(report.collection.skipped.len(), "document", "documents")
        ));
    }
    lines.push(summary);
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
