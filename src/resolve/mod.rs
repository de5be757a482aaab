//! Cross-reference resolution.
//!
//! Resolution is a two-phase process: a [`TypeDictionary`] is built once from
//! every documented type, then each page receives a [`ReferenceResolver`]
//! that answers lookups against the frozen dictionary.

mod dictionary;

pub use dictionary::TypeDictionary;

use std::sync::Arc;

/// Link target used for references that cannot be resolved.
pub const UNKNOWN_TYPE_PATH: &str = "unknownType.md";

/// Turns a textual type reference into a link target.
pub trait ReferenceResolver: Sync {
    /// Resolve `reference`, which may carry a `#member` fragment.
    fn resolve(&self, reference: &str) -> String;
}

impl<F> ReferenceResolver for F
where
    F: Fn(&str) -> String + Sync,
{
    fn resolve(&self, reference: &str) -> String {
        self(reference)
    }
}

/// URL-rooted prefix prepended to every resolved location.
///
/// Always ends in exactly one `/`, with runs of `/` collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Normalize a base path, e.g. `docs//api` → `docs/api/`.
    pub fn new(path: &str) -> Self {
        let mut normalized = String::with_capacity(path.len() + 1);
        for c in path.chars().chain(std::iter::once('/')) {
            if c == '/' && normalized.ends_with('/') {
                continue;
            }
            normalized.push(c);
        }
        Self(normalized)
    }

    /// The normalized prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self("/".to_string())
    }
}

/// Resolver backed by a frozen [`TypeDictionary`].
#[derive(Debug, Clone)]
pub struct DictionaryResolver {
    dictionary: Arc<TypeDictionary>,
    base_path: BasePath,
}

impl DictionaryResolver {
    /// Create a resolver over a dictionary.
    pub fn new(dictionary: Arc<TypeDictionary>, base_path: BasePath) -> Self {
        Self {
            dictionary,
            base_path,
        }
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &TypeDictionary {
        &self.dictionary
    }
}

impl ReferenceResolver for DictionaryResolver {
    /// Only the text before the first `#` is looked up; member fragments are
    /// not turned into anchors.
    fn resolve(&self, reference: &str) -> String {
        let type_name = reference
            .split_once('#')
            .map_or(reference, |(type_name, _)| type_name);
        match self.dictionary.get(type_name) {
            Some(location) => format!("{}{}", self.base_path.as_str(), location),
            None => UNKNOWN_TYPE_PATH.to_string(),
        }
    }
}
