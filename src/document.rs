//! Source document parsing: frontmatter split, YAML metadata, markdown body.
//!
//! A document may open with a YAML block fenced by `---`:
//!
//! ```markdown
//! ---
//! title: "Hello, World!"
//! date: 2024-01-01
//! summary: A first post
//! ---
//! # Hi
//! ```
//!
//! The opening marker must be the first three characters of the file. The
//! block ends at the next `---` anywhere in the text; later occurrences belong
//! to the body. A file that does not start with the marker has no metadata
//! and its whole text is the body.

use crate::markdown::MarkdownConverter;
use serde_yaml_ng::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DELIMITER: &str = "---";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid frontmatter in {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
    #[error("frontmatter in {0} has no closing `---`")]
    Unterminated(PathBuf),
}

/// Metadata and rendered body of one source file.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub metadata: Mapping,
    pub html: String,
}

impl ParsedDocument {
    /// Look up a metadata value, treating explicit `null` as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key).filter(|v| !v.is_null())
    }
}

/// Raw pieces of a document before YAML parsing and markdown conversion.
#[derive(Debug, PartialEq, Eq)]
pub struct Split<'a> {
    /// Trimmed frontmatter text, `None` when the file has no leading marker.
    pub frontmatter: Option<&'a str>,
    pub body: &'a str,
}

/// Split `raw` into frontmatter and body.
///
/// Returns `None` when the text opens with `---` but never closes it.
pub fn split_frontmatter(raw: &str) -> Option<Split<'_>> {
    let Some(rest) = raw.strip_prefix(DELIMITER) else {
        return Some(Split {
            frontmatter: None,
            body: raw,
        });
    };
    let end = rest.find(DELIMITER)?;
    Some(Split {
        frontmatter: Some(rest[..end].trim()),
        body: &rest[end + DELIMITER.len()..],
    })
}

/// Parse YAML frontmatter into a mapping. Empty text yields an empty mapping,
/// and so does well-formed YAML of any other shape (a list, a bare scalar):
/// such a document has no `title` and is skipped by the collector.
fn parse_metadata(frontmatter: &str, path: &Path) -> Result<Mapping, ParseError> {
    let value: Value = serde_yaml_ng::from_str(frontmatter).map_err(|source| ParseError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => {
            log::warn!("frontmatter in {} is not a key-value mapping", path.display());
            Ok(Mapping::new())
        }
    }
}

/// Read and parse one source document.
pub fn parse_document(
    path: &Path,
    markdown: &MarkdownConverter,
) -> Result<ParsedDocument, ParseError> {
    let raw = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let split = split_frontmatter(&raw).ok_or_else(|| ParseError::Unterminated(path.to_path_buf()))?;

    let metadata = match split.frontmatter {
        Some(text) => parse_metadata(text, path)?,
        None => Mapping::new(),
    };

    Ok(ParsedDocument {
        metadata,
        html: markdown.to_html(split.body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse_str(raw: &str) -> Result<ParsedDocument, ParseError> {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.md");
        fs::write(&path, raw).unwrap();
        parse_document(&path, &MarkdownConverter::default())
    }

    #[test]
    fn split_without_marker_is_all_body() {
        let split = split_frontmatter("# Just a body").unwrap();
        assert_eq!(split.frontmatter, None);
        assert_eq!(split.body, "# Just a body");
    }

    #[test]
    fn split_with_marker() {
        let split = split_frontmatter("---\ntitle: A\n---\nbody").unwrap();
        assert_eq!(split.frontmatter, Some("title: A"));
        assert_eq!(split.body, "\nbody");
    }

    #[test]
    fn split_only_on_first_two_markers() {
        let split = split_frontmatter("---\ntitle: A\n---\nabove\n---\nbelow").unwrap();
        assert_eq!(split.frontmatter, Some("title: A"));
        assert_eq!(split.body, "\nabove\n---\nbelow");
    }

    #[test]
    fn split_marker_must_be_at_start() {
        let split = split_frontmatter("\n---\ntitle: A\n---\n").unwrap();
        assert_eq!(split.frontmatter, None);
    }

    #[test]
    fn split_unterminated_is_none() {
        assert!(split_frontmatter("---\ntitle: A\nno end").is_none());
    }

    #[test]
    fn parses_metadata_and_body() {
        let doc = parse_str("---\ntitle: \"Hello, World!\"\ndate: 2024-01-01\n---\n# Hi\n").unwrap();
        assert_eq!(doc.field("title").and_then(Value::as_str), Some("Hello, World!"));
        assert_eq!(doc.field("date").and_then(Value::as_str), Some("2024-01-01"));
        assert_eq!(doc.html.trim(), "<h1>Hi</h1>");
    }

    #[test]
    fn no_frontmatter_gives_empty_metadata() {
        let doc = parse_str("Plain *text*").unwrap();
        assert!(doc.metadata.is_empty());
        assert!(doc.html.contains("<em>text</em>"));
    }

    #[test]
    fn empty_frontmatter_gives_empty_metadata() {
        let doc = parse_str("---\n---\nbody").unwrap();
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn null_field_is_absent() {
        let doc = parse_str("---\ntitle: ~\ndate: 2024-01-01\n---\n").unwrap();
        assert!(doc.field("title").is_none());
        assert!(doc.field("date").is_some());
    }

    #[test]
    fn nested_metadata_is_accepted() {
        let doc = parse_str("---\ntitle: T\ntags:\n  - a\n  - b\nextra:\n  k: v\n---\n").unwrap();
        assert!(doc.field("tags").is_some_and(Value::is_sequence));
    }

    #[test]
    fn invalid_yaml_is_error() {
        let err = parse_str("---\ntitle: [unclosed\n---\nbody").unwrap_err();
        assert!(matches!(err, ParseError::Yaml { .. }));
    }

    #[test]
    fn list_frontmatter_gives_empty_metadata() {
        let doc = parse_str("---\n- title\n- date\n---\nbody").unwrap();
        assert!(doc.metadata.is_empty());
        assert!(doc.html.contains("<p>body</p>"));
    }

    #[test]
    fn scalar_frontmatter_gives_empty_metadata() {
        let doc = parse_str("---\njust a sentence\n---\n").unwrap();
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn unterminated_frontmatter_is_error() {
        let err = parse_str("---\ntitle: A\n").unwrap_err();
        assert!(matches!(err, ParseError::Unterminated(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = parse_document(&tmp.path().join("absent.md"), &MarkdownConverter::default())
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
