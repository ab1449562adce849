//! Slug derivation for article titles.
//!
//! A slug is the filename stem and link target of an article page. It is a
//! pure function of the title: lowercase, spaces replaced by a separator, and
//! a small set of punctuation characters deleted outright.
//!
//! ```text
//! "Hello, World!"          → "hello-world!"
//! "What's New in 2.0?"     → "whats-new-in-20"
//! "Dr. Strangelove"        → "dr-strangelove"
//! ```
//!
//! Only characters in the strip set are removed. Everything else, including
//! `!`, `/` and non-ASCII letters, passes through unchanged. The strip set and
//! separator are configurable through `[slug]` in `site.toml`; the defaults
//! reproduce the behaviour above.

use serde::{Deserialize, Serialize};

/// Characters deleted from slugs by default.
pub const DEFAULT_STRIP: &str = ",'.?";

/// Rules for turning a title into a slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugRules {
    /// Every character in this string is deleted from the slug.
    pub strip: String,
    /// Replacement for each space in the title.
    pub separator: String,
}

impl Default for SlugRules {
    fn default() -> Self {
        Self {
            strip: DEFAULT_STRIP.to_string(),
            separator: "-".to_string(),
        }
    }
}

impl SlugRules {
    /// Derive a slug from `title`.
    ///
    /// Never fails: an empty title yields an empty slug.
    pub fn slugify(&self, title: &str) -> String {
        let mut slug = String::with_capacity(title.len());
        for ch in title.to_lowercase().chars() {
            if ch == ' ' {
                slug.push_str(&self.separator);
            } else if !self.strip.contains(ch) {
                slug.push(ch);
            }
        }
        slug
    }
}

/// Derive a slug using the default rules.
pub fn slugify(title: &str) -> String {
    SlugRules::default().slugify(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn strips_default_punctuation() {
        assert_eq!(slugify("What's New, Dr. Who?"), "whats-new-dr-who");
    }

    #[test]
    fn exclamation_mark_is_kept() {
        assert_eq!(slugify("Hello, World!"), "hello-world!");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn every_space_becomes_a_separator() {
        assert_eq!(slugify("a  b"), "a--b");
    }

    #[test]
    fn non_ascii_passes_through_lowercased() {
        assert_eq!(slugify("Über Café"), "über-café");
    }

    #[test]
    fn slugs_are_lowercase_and_free_of_stripped_chars() {
        let titles = [
            "A.B.C",
            "Isn't It?",
            "ONE, TWO, THREE.",
            "mixed Case 'quotes'",
            "???",
        ];
        for title in titles {
            let slug = slugify(title);
            assert_eq!(slug, slug.to_lowercase(), "{title}");
            assert!(
                !slug.chars().any(|c| DEFAULT_STRIP.contains(c)),
                "{title} → {slug}"
            );
        }
    }

    #[test]
    fn deterministic() {
        let title = "Same Input, Same Output.";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn custom_strip_set() {
        let rules = SlugRules {
            strip: ",'.?!:".to_string(),
            ..SlugRules::default()
        };
        assert_eq!(rules.slugify("Hello, World!"), "hello-world");
        assert_eq!(rules.slugify("Part 1: Intro"), "part-1-intro");
    }

    #[test]
    fn custom_separator() {
        let rules = SlugRules {
            separator: "_".to_string(),
            ..SlugRules::default()
        };
        assert_eq!(rules.slugify("Snake Case Title"), "snake_case_title");
    }

    #[test]
    fn rules_parse_from_toml() {
        let rules: SlugRules = toml::from_str(r#"strip = ",.""#).unwrap();
        assert_eq!(rules.strip, ",.");
        assert_eq!(rules.separator, "-");
    }
}
