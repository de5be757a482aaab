//! Element-level types.

use super::DocComment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a documented element.
///
/// The declaration order is the sort order used when grouping members on a
/// type page: fields, then methods, then constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A module (top level of the tree)
    Module,
    /// A package inside a module
    Package,
    /// A type (class, interface, enum, record, ...)
    Type,
    /// A field of a type
    Field,
    /// A method of a type
    Method,
    /// A constructor of a type
    Constructor,
}

impl ElementKind {
    /// Upper-case label used in titles, headings and index bullets.
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Module => "MODULE",
            ElementKind::Package => "PACKAGE",
            ElementKind::Type => "TYPE",
            ElementKind::Field => "FIELD",
            ElementKind::Method => "METHOD",
            ElementKind::Constructor => "CONSTRUCTOR",
        }
    }

    /// Whether this kind is a member of a type.
    pub fn is_member(self) -> bool {
        matches!(
            self,
            ElementKind::Field | ElementKind::Method | ElementKind::Constructor
        )
    }

    /// Whether this kind is executable (has a parameter list).
    pub fn is_executable(self) -> bool {
        matches!(self, ElementKind::Method | ElementKind::Constructor)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Access level of an element as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Public and protected elements appear in the generated pages.
    pub fn is_documented(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Protected)
    }
}

/// A parameter of a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Declared type, possibly package-qualified
    pub type_name: String,
    /// Parameter name
    pub name: String,
}

impl Parameter {
    /// Create a new parameter.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// Handle to an element stored in a [`DocTree`](super::DocTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Position of the element in its tree's insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the documentation tree.
#[derive(Debug, Clone)]
pub struct DocumentedElement {
    /// Element kind
    pub kind: ElementKind,

    /// Simple name
    pub name: String,

    /// Qualified name (for types: package plus dotted nested name)
    pub qualified_name: String,

    /// Access level
    pub visibility: Visibility,

    /// Associated documentation comment
    pub comment: Option<DocComment>,

    /// Return type for methods, declared type for fields
    pub type_name: Option<String>,

    /// Parameters of methods and constructors
    pub params: Vec<Parameter>,

    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl DocumentedElement {
    /// Create a new element with an empty qualified name.
    ///
    /// The qualified name is derived when the element is added to a tree,
    /// unless one is set explicitly.
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            qualified_name: String::new(),
            visibility: Visibility::default(),
            comment: None,
            type_name: None,
            params: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a module element.
    pub fn module(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Module, name)
    }

    /// Create a package element.
    pub fn package(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Package, name)
    }

    /// Create a type element.
    pub fn type_(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Type, name)
    }

    /// Create a field element with its declared type.
    pub fn field(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(ElementKind::Field, name).with_type(type_name)
    }

    /// Create a method element with its return type.
    pub fn method(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self::new(ElementKind::Method, name).with_type(return_type)
    }

    /// Create a constructor element.
    pub fn constructor(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Constructor, name)
    }

    /// Set the qualified name.
    pub fn with_qualified_name(mut self, name: impl Into<String>) -> Self {
        self.qualified_name = name.into();
        self
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach a documentation comment.
    pub fn with_comment(mut self, comment: DocComment) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Set the return or declared type.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Append a parameter.
    pub fn with_param(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(Parameter::new(type_name, name));
        self
    }

    /// Enclosing element, if any.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_groups_fields_first() {
        assert!(ElementKind::Field < ElementKind::Method);
        assert!(ElementKind::Method < ElementKind::Constructor);
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(ElementKind::Package.to_string(), "PACKAGE");
        assert_eq!(ElementKind::Constructor.label(), "CONSTRUCTOR");
    }

    #[test]
    fn test_visibility_documented() {
        assert!(Visibility::Public.is_documented());
        assert!(Visibility::Protected.is_documented());
        assert!(!Visibility::PackagePrivate.is_documented());
        assert!(!Visibility::Private.is_documented());
    }

    #[test]
    fn test_element_builders() {
        let method = DocumentedElement::method("get", "java.lang.String")
            .with_param("int", "index")
            .with_visibility(Visibility::Protected);
        assert_eq!(method.kind, ElementKind::Method);
        assert_eq!(method.type_name.as_deref(), Some("java.lang.String"));
        assert_eq!(method.params, vec![Parameter::new("int", "index")]);
        assert!(method.parent().is_none());
    }
}
