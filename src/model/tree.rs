//! Arena-backed documentation tree.

use super::{DocumentedElement, ElementId, ElementKind};
use crate::error::{Error, Result};
use std::ops::Index;

/// The full set of documented elements for one generation run.
///
/// Elements are stored in insertion order and refer to each other through
/// [`ElementId`] handles. The tree is built once by the host (or the JSON
/// loader) and is read-only while pages are generated.
#[derive(Debug, Clone, Default)]
pub struct DocTree {
    elements: Vec<DocumentedElement>,
    roots: Vec<ElementId>,
}

impl DocTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Top-level elements in insertion order.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Add a top-level element.
    pub fn add_root(&mut self, element: DocumentedElement) -> ElementId {
        let id = self.insert(None, element);
        self.roots.push(id);
        id
    }

    /// Add an element enclosed by `parent`.
    pub fn add_child(&mut self, parent: ElementId, element: DocumentedElement) -> Result<ElementId> {
        let parent_kind = self
            .get(parent)
            .ok_or_else(|| Error::InvalidTree(format!("unknown parent element #{}", parent.0)))?
            .kind;

        if element.kind == ElementKind::Module {
            return Err(Error::InvalidTree(format!(
                "module '{}' cannot be enclosed by another element",
                element.name
            )));
        }
        if parent_kind.is_member() {
            return Err(Error::InvalidTree(format!(
                "'{}' cannot be enclosed by a {}",
                element.name,
                parent_kind.label().to_lowercase()
            )));
        }

        let id = self.insert(Some(parent), element);
        self.elements[parent.0].children.push(id);
        Ok(id)
    }

    fn insert(&mut self, parent: Option<ElementId>, mut element: DocumentedElement) -> ElementId {
        let id = ElementId(self.elements.len());
        element.parent = parent;
        element.children.clear();
        self.elements.push(element);

        if self.elements[id.0].qualified_name.is_empty() {
            let qualified = self.derive_qualified_name(id);
            self.elements[id.0].qualified_name = qualified;
        }
        id
    }

    fn derive_qualified_name(&self, id: ElementId) -> String {
        let element = &self[id];
        match element.kind {
            ElementKind::Type => {
                let nested = self.nested_type_name(id);
                match self.package_of(id) {
                    Some(package) if !package.qualified_name.is_empty() => {
                        format!("{}.{}", package.qualified_name, nested)
                    }
                    _ => nested,
                }
            }
            _ => element.name.clone(),
        }
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&DocumentedElement> {
        self.elements.get(id.0)
    }

    /// Iterate over all elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &DocumentedElement)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, element)| (ElementId(i), element))
    }

    /// Direct children of an element.
    pub fn children(&self, id: ElementId) -> impl Iterator<Item = (ElementId, &DocumentedElement)> {
        self[id].children.iter().map(move |&child| (child, &self[child]))
    }

    /// Enclosing elements from the nearest outwards.
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self[id].parent,
        }
    }

    /// Nearest element of `kind`, starting with the element itself.
    pub fn enclosing(&self, id: ElementId, kind: ElementKind) -> Option<&DocumentedElement> {
        std::iter::once(&self[id])
            .chain(self.ancestors(id).map(|(_, element)| element))
            .find(|element| element.kind == kind)
    }

    /// Enclosing package, or the element itself if it is a package.
    pub fn package_of(&self, id: ElementId) -> Option<&DocumentedElement> {
        self.enclosing(id, ElementKind::Package)
    }

    /// Enclosing module, or the element itself if it is a module.
    pub fn module_of(&self, id: ElementId) -> Option<&DocumentedElement> {
        self.enclosing(id, ElementKind::Module)
    }

    /// Dotted name of a type including its enclosing types, e.g. `Outer.Inner`.
    ///
    /// The walk stops at the first enclosing element that is not a type.
    pub fn nested_type_name(&self, id: ElementId) -> String {
        let mut names = vec![self[id].name.as_str()];
        let mut current = self[id].parent;
        while let Some(parent) = current {
            let element = &self[parent];
            if element.kind != ElementKind::Type {
                break;
            }
            names.push(element.name.as_str());
            current = element.parent;
        }
        names.reverse();
        names.join(".")
    }

    /// Name shown in a page title.
    pub fn display_name(&self, id: ElementId) -> &str {
        let element = &self[id];
        match element.kind {
            ElementKind::Module if element.name.is_empty() => "unnamed",
            ElementKind::Module => element.name.as_str(),
            _ => element.qualified_name.as_str(),
        }
    }
}

impl Index<ElementId> for DocTree {
    type Output = DocumentedElement;

    /// Panics if the id was issued by a different tree.
    fn index(&self, id: ElementId) -> &Self::Output {
        &self.elements[id.0]
    }
}

/// Iterator over enclosing elements, see [`DocTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a DocTree,
    next: Option<ElementId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (ElementId, &'a DocumentedElement);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let element = &self.tree[id];
        self.next = element.parent;
        Some((id, element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DocTree, ElementId, ElementId) {
        let mut tree = DocTree::new();
        let module = tree.add_root(DocumentedElement::module("m"));
        let package = tree
            .add_child(module, DocumentedElement::package("com.example"))
            .unwrap();
        let outer = tree
            .add_child(package, DocumentedElement::type_("Outer"))
            .unwrap();
        let inner = tree
            .add_child(outer, DocumentedElement::type_("Inner"))
            .unwrap();
        let deepest = tree
            .add_child(inner, DocumentedElement::type_("Deepest"))
            .unwrap();
        (tree, outer, deepest)
    }

    #[test]
    fn test_nested_type_name() {
        let (tree, outer, deepest) = sample();
        assert_eq!(tree.nested_type_name(outer), "Outer");
        assert_eq!(tree.nested_type_name(deepest), "Outer.Inner.Deepest");
    }

    #[test]
    fn test_derived_qualified_name() {
        let (tree, _, deepest) = sample();
        assert_eq!(tree[deepest].qualified_name, "com.example.Outer.Inner.Deepest");
        assert_eq!(tree.display_name(deepest), "com.example.Outer.Inner.Deepest");
    }

    #[test]
    fn test_enclosing_module_and_package() {
        let (tree, _, deepest) = sample();
        assert_eq!(tree.module_of(deepest).map(|m| m.name.as_str()), Some("m"));
        assert_eq!(
            tree.package_of(deepest).map(|p| p.name.as_str()),
            Some("com.example")
        );
        assert_eq!(tree.ancestors(deepest).count(), 4);
    }

    #[test]
    fn test_unnamed_module_title() {
        let mut tree = DocTree::new();
        let module = tree.add_root(DocumentedElement::module(""));
        assert_eq!(tree.display_name(module), "unnamed");
    }

    #[test]
    fn test_module_cannot_be_nested() {
        let mut tree = DocTree::new();
        let module = tree.add_root(DocumentedElement::module("m"));
        let result = tree.add_child(module, DocumentedElement::module("n"));
        assert!(matches!(result, Err(Error::InvalidTree(_))));
    }

    #[test]
    fn test_members_have_no_children() {
        let mut tree = DocTree::new();
        let ty = tree.add_root(DocumentedElement::type_("T"));
        let field = tree
            .add_child(ty, DocumentedElement::field("f", "int"))
            .unwrap();
        let result = tree.add_child(field, DocumentedElement::type_("U"));
        assert!(matches!(result, Err(Error::InvalidTree(_))));
    }
}
