// src/domain/tags.rs
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

lazy_static! {
    static ref TAG_SEPARATOR_REGEX: Regex =
        Regex::new(r"[,;\n]+").expect("Failed to compile tag separator regex");
    static ref WHITESPACE_REGEX: Regex =
        Regex::new(r"\s+").expect("Failed to compile whitespace regex");
}

/// Deduplicated, order-preserving list of Anki tags.
///
/// Anki separates tags by spaces, so multiword tags are joined with dashes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Split free text on commas, semicolons and newlines
    pub fn from_text(text: &str) -> Self {
        let mut tags: Vec<String> = Vec::new();

        for token in TAG_SEPARATOR_REGEX.split(text) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let tag = WHITESPACE_REGEX
                .replace_all(token, "-")
                .trim_matches(|c| c == ',' || c == ';')
                .to_string();

            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self(tags)
    }

    /// Tags in first-seen order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

// Serialized as the space-joined form Anki imports
impl Serialize for TagList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo, Bar Baz;; qux", "foo Bar-Baz qux")]
    #[case("a,b,a", "a b")]
    #[case("A, a", "A a")]
    #[case("one\ntwo\n\nthree", "one two three")]
    #[case("  spaced   out  tag ", "spaced-out-tag")]
    #[case(",;,", "")]
    #[case("", "")]
    fn given_tag_text_when_extracting_then_returns_joined_tags(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(TagList::from_text(input).to_string(), expected);
    }

    #[test]
    fn given_duplicate_tags_when_extracting_then_keeps_first_seen_order() {
        let tags = TagList::from_text("z, y, z, x, y");

        assert_eq!(tags.as_slice(), &["z", "y", "x"]);
    }

    #[test]
    fn given_empty_input_when_extracting_then_is_empty() {
        assert!(TagList::from_text("   ").is_empty());
    }

    #[test]
    fn given_tag_list_when_serializing_to_json_then_emits_joined_string() {
        let tags = TagList::from_text("rust, borrow checker");

        let json = serde_json::to_string(&tags).unwrap();

        assert_eq!(json, "\"rust borrow-checker\"");
    }
}
