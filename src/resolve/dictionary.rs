//! Type dictionary: dotted nested type name → output location.

use crate::layout;
use crate::model::{DocTree, ElementId, ElementKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lookup table from a type's dotted nested name (no package or module
/// prefix, e.g. `Outer.Inner`) to its location `module/package/Outer.Inner`.
///
/// Keys are unique. When two types share a nested name the first one
/// registered wins and the collision is logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDictionary {
    entries: BTreeMap<String, String>,
}

impl TypeDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from every type element in the tree.
    pub fn from_tree(tree: &DocTree) -> Self {
        Self::build(
            tree,
            tree.iter()
                .filter(|(_, element)| element.kind == ElementKind::Type)
                .map(|(id, _)| id),
        )
    }

    /// Build a dictionary from the given elements in a single pass.
    ///
    /// Elements that are not types are ignored.
    pub fn build(tree: &DocTree, elements: impl IntoIterator<Item = ElementId>) -> Self {
        let mut dictionary = Self::new();
        for id in elements {
            if tree[id].kind != ElementKind::Type {
                continue;
            }
            dictionary.insert(tree.nested_type_name(id), layout::type_location(tree, id));
        }
        log::debug!("type dictionary built with {} entries", dictionary.len());
        dictionary
    }

    /// Register a location unless the name is already taken.
    ///
    /// Returns `false` and logs a warning when the entry is discarded.
    pub fn insert(&mut self, name: impl Into<String>, location: impl Into<String>) -> bool {
        let name = name.into();
        let location = location.into();
        match self.entries.get(&name) {
            Some(kept) => {
                log::warn!(
                    "'{}={}' is discarded because there is already an entry '{}={}'",
                    name,
                    location,
                    name,
                    kept
                );
                false
            }
            None => {
                self.entries.insert(name, location);
                true
            }
        }
    }

    /// Location of a type, if registered.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Check if a type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentedElement;

    #[test]
    fn test_build_nested_types() {
        let mut tree = DocTree::new();
        let module = tree.add_root(DocumentedElement::module("m"));
        let package = tree
            .add_child(module, DocumentedElement::package("pkg"))
            .unwrap();
        let outer = tree
            .add_child(package, DocumentedElement::type_("Outer"))
            .unwrap();
        tree.add_child(outer, DocumentedElement::type_("Inner"))
            .unwrap();
        tree.add_child(outer, DocumentedElement::method("run", "void"))
            .unwrap();

        let dictionary = TypeDictionary::from_tree(&tree);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("Outer"), Some("m/pkg/Outer"));
        assert_eq!(dictionary.get("Outer.Inner"), Some("m/pkg/Outer.Inner"));
        assert!(!dictionary.contains("run"));
    }

    #[test]
    fn test_first_registration_wins() {
        let mut tree = DocTree::new();
        let module = tree.add_root(DocumentedElement::module("m"));
        let first = tree
            .add_child(module, DocumentedElement::package("alpha"))
            .unwrap();
        let second = tree
            .add_child(module, DocumentedElement::package("beta"))
            .unwrap();
        tree.add_child(first, DocumentedElement::type_("Util"))
            .unwrap();
        tree.add_child(second, DocumentedElement::type_("Util"))
            .unwrap();

        let dictionary = TypeDictionary::from_tree(&tree);
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("Util"), Some("m/alpha/Util"));
    }

    #[test]
    fn test_insert_does_not_overwrite() {
        let mut dictionary = TypeDictionary::new();
        assert!(dictionary.insert("Foo", "m/a/Foo"));
        assert!(!dictionary.insert("Foo", "m/b/Foo"));
        assert_eq!(dictionary.get("Foo"), Some("m/a/Foo"));
    }

    #[test]
    fn test_missing_module_and_package() {
        let mut tree = DocTree::new();
        tree.add_root(DocumentedElement::type_("Loose"));
        let dictionary = TypeDictionary::from_tree(&tree);
        assert_eq!(dictionary.get("Loose"), Some("(none)/(none)/Loose"));
    }
}
