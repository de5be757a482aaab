//! Block-tag classification and formatting.

use crate::model::RawTag;
use crate::resolve::ReferenceResolver;
use std::fmt;

/// Placeholder for documentation that is missing or incomplete.
pub const TBD: &str = "t.b.d.";

/// Rendered value of a tag that could not be classified.
pub const UNKNOWN_TAG_MARKER: &str = "(doc contains some error)";

/// Visible text of a rendered `@link` tag.
pub const LINK_TEXT: &str = "here";

/// Kind of a block tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Link,
    See,
    Param,
    Return,
    Unknown,
}

impl TagKind {
    /// Classify a tag-name token such as `@param`.
    pub fn classify(token: Option<&str>) -> Self {
        match token {
            Some("@link") => TagKind::Link,
            Some("@see") => TagKind::See,
            Some("@param") => TagKind::Param,
            Some("@return") => TagKind::Return,
            _ => TagKind::Unknown,
        }
    }

    /// Upper-case label shown in front of a rendered tag.
    pub fn label(self) -> &'static str {
        match self {
            TagKind::Link => "LINK",
            TagKind::See => "SEE",
            TagKind::Param => "PARAM",
            TagKind::Return => "RETURN",
            TagKind::Unknown => "UNKNOWN",
        }
    }

    /// Render a raw tag value according to this kind.
    pub fn format(self, value: &str, resolver: &dyn ReferenceResolver) -> String {
        match self {
            TagKind::Link => format!("[{}]({})", LINK_TEXT, value),
            TagKind::See => format!("[`{}`]({})", value, resolver.resolve(value)),
            TagKind::Param => format_param(value),
            TagKind::Return => value.to_string(),
            TagKind::Unknown => UNKNOWN_TAG_MARKER.to_string(),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `name description` → `` `name` description``
fn format_param(value: &str) -> String {
    let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
    match normalized.split_once(' ') {
        Some((name, description)) => format!("`{}` {}", name, description),
        None if normalized.is_empty() => TBD.to_string(),
        None => format!("`{}` {}", normalized, TBD),
    }
}

/// A classified block tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub value: String,
}

impl Tag {
    /// Classify a tag name and trim its value.
    pub fn new(name: Option<&str>, value: &str) -> Self {
        Self {
            kind: TagKind::classify(name),
            value: value.trim().to_string(),
        }
    }

    /// Render the tag value.
    pub fn format(&self, resolver: &dyn ReferenceResolver) -> String {
        self.kind.format(&self.value, resolver)
    }
}

impl From<&RawTag> for Tag {
    fn from(raw: &RawTag) -> Self {
        let name = raw.name.trim();
        Tag::new((!name.is_empty()).then_some(name), &raw.text)
    }
}
