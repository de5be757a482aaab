//! Documentation comment types.

use serde::{Deserialize, Serialize};

/// A raw block tag as supplied by the host: the `@name` token and the text
/// that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTag {
    /// Tag name token, including the leading `@`
    pub name: String,
    /// Remaining text
    #[serde(default)]
    pub text: String,
}

impl RawTag {
    /// Create a new raw tag.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A documentation comment: free-form body plus ordered block tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    /// Body text
    #[serde(default)]
    pub body: String,
    /// Block tags in source order
    #[serde(default)]
    pub tags: Vec<RawTag>,
}

impl DocComment {
    /// Create a comment with the given body and no tags.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            tags: Vec::new(),
        }
    }

    /// Append a block tag.
    pub fn with_tag(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.tags.push(RawTag::new(name, text));
        self
    }

    /// Check if the comment has neither body nor tags.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty() && self.tags.is_empty()
    }

    /// Split raw comment text into body and block tags.
    ///
    /// Comment delimiters (`/**`, `*/`) and leading `*` gutters are removed.
    /// A line whose first token starts with `@` opens a block tag; following
    /// lines continue it until the next block tag.
    pub fn parse(raw: &str) -> Self {
        let mut body_lines: Vec<&str> = Vec::new();
        let mut tags: Vec<(String, Vec<&str>)> = Vec::new();

        for line in raw.lines() {
            let line = strip_gutter(line);

            if let Some(rest) = line.trim_start().strip_prefix('@') {
                if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
                    let (name, text) = match rest.find(char::is_whitespace) {
                        Some(i) => (&rest[..i], rest[i..].trim_start()),
                        None => (rest, ""),
                    };
                    tags.push((format!("@{}", name), vec![text]));
                    continue;
                }
            }

            match tags.last_mut() {
                Some((_, text)) => text.push(line),
                None => body_lines.push(line),
            }
        }

        Self {
            body: body_lines.join("\n").trim().to_string(),
            tags: tags
                .into_iter()
                .map(|(name, text)| RawTag::new(name, text.join("\n").trim_end()))
                .collect(),
        }
    }
}

fn strip_gutter(line: &str) -> &str {
    let mut line = line.trim_start();
    if let Some(rest) = line.strip_prefix("/**") {
        line = rest;
    }
    if let Some(rest) = line.trim_end().strip_suffix("*/") {
        line = rest;
    }
    match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_and_tags() {
        let raw = "/**\n * Hello, I am an example.\n * How are you?\n *\n * @see ExampleInterface\n * @param p A parameter\n *   spanning lines.\n */";
        let comment = DocComment::parse(raw);

        assert_eq!(comment.body, "Hello, I am an example.\nHow are you?");
        assert_eq!(
            comment.tags,
            vec![
                RawTag::new("@see", "ExampleInterface"),
                RawTag::new("@param", "p A parameter\n  spanning lines."),
            ]
        );
    }

    #[test]
    fn test_parse_tag_without_text() {
        let comment = DocComment::parse("Body\n@deprecated");
        assert_eq!(comment.body, "Body");
        assert_eq!(comment.tags, vec![RawTag::new("@deprecated", "")]);
    }

    #[test]
    fn test_parse_ignores_non_tag_at_sign() {
        let comment = DocComment::parse("Mail me\n@ 10am or user@example.com");
        assert_eq!(comment.body, "Mail me\n@ 10am or user@example.com");
        assert!(comment.tags.is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(DocComment::default().is_empty());
        assert!(DocComment::new("  ").is_empty());
        assert!(!DocComment::new("").with_tag("@return", "x").is_empty());
    }
}
