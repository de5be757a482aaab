//! JSON interchange format for documentation trees.

use crate::error::Result;
use crate::model::{
    DocComment, DocTree, DocumentedElement, ElementId, ElementKind, Parameter, Visibility,
};
use serde::{Deserialize, Serialize};

/// Top-level JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeFile {
    /// Root elements, usually modules
    #[serde(default)]
    pub elements: Vec<NodeDef>,
}

/// A documentation comment in JSON: either raw comment text or an already
/// split body plus tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentDef {
    Raw(String),
    Structured(DocComment),
}

impl From<CommentDef> for DocComment {
    fn from(def: CommentDef) -> Self {
        match def {
            CommentDef::Raw(raw) => DocComment::parse(&raw),
            CommentDef::Structured(comment) => comment,
        }
    }
}

/// A single element with its nested children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDef {
    pub kind: ElementKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDef>,
}

impl NodeDef {
    fn into_parts(self) -> (DocumentedElement, Vec<NodeDef>) {
        let mut element = DocumentedElement::new(self.kind, self.name)
            .with_visibility(self.visibility);
        if let Some(qualified) = self.qualified_name {
            element = element.with_qualified_name(qualified);
        }
        if let Some(type_name) = self.type_name {
            element = element.with_type(type_name);
        }
        element.comment = self.comment.map(DocComment::from);
        element.params = self.params;
        (element, self.children)
    }
}

impl TreeFile {
    /// Convert into a [`DocTree`], preserving pre-order.
    pub fn into_tree(self) -> Result<DocTree> {
        let mut tree = DocTree::new();
        let mut stack: Vec<(Option<ElementId>, NodeDef)> =
            self.elements.into_iter().rev().map(|node| (None, node)).collect();

        while let Some((parent, node)) = stack.pop() {
            let (element, children) = node.into_parts();
            let id = match parent {
                Some(parent) => tree.add_child(parent, element)?,
                None => tree.add_root(element),
            };
            stack.extend(children.into_iter().rev().map(|child| (Some(id), child)));
        }

        Ok(tree)
    }
}

/// Parse a documentation tree from a JSON string.
pub fn parse_str(json: &str) -> Result<DocTree> {
    let file: TreeFile = serde_json::from_str(json)?;
    file.into_tree()
}

/// Parse a documentation tree from a reader.
pub fn parse_reader<R: std::io::Read>(reader: R) -> Result<DocTree> {
    let file: TreeFile = serde_json::from_reader(reader)?;
    file.into_tree()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE: &str = r#"{
        "elements": [{
            "kind": "module",
            "name": "m",
            "children": [{
                "kind": "package",
                "name": "pkg",
                "comment": "Package docs.",
                "children": [{
                    "kind": "type",
                    "name": "Outer",
                    "comment": {"body": "Outer type.", "tags": [{"name": "@see", "text": "Outer.Inner"}]},
                    "children": [
                        {"kind": "type", "name": "Inner"},
                        {"kind": "method", "name": "get", "type_name": "java.lang.String",
                         "params": [{"type_name": "int", "name": "i"}]},
                        {"kind": "field", "name": "hidden", "type_name": "int", "visibility": "private"}
                    ]
                }]
            }]
        }]
    }"#;

    #[test]
    fn test_parse_preorder() {
        let tree = parse_str(SAMPLE).unwrap();
        let names: Vec<_> = tree.iter().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(names, vec!["m", "pkg", "Outer", "Inner", "get", "hidden"]);
    }

    #[test]
    fn test_parse_comments_and_members() {
        let tree = parse_str(SAMPLE).unwrap();
        let (_, package) = tree.iter().nth(1).unwrap();
        assert_eq!(package.comment.as_ref().unwrap().body, "Package docs.");

        let (inner_id, inner) = tree.iter().nth(3).unwrap();
        assert_eq!(inner.qualified_name, "pkg.Outer.Inner");
        assert_eq!(tree.nested_type_name(inner_id), "Outer.Inner");

        let (_, method) = tree.iter().nth(4).unwrap();
        assert_eq!(method.params, vec![Parameter::new("int", "i")]);

        let (_, field) = tree.iter().nth(5).unwrap();
        assert_eq!(field.visibility, Visibility::Private);
    }

    #[test]
    fn test_parse_rejects_nested_module() {
        let json = r#"{"elements": [{"kind": "module", "name": "a",
            "children": [{"kind": "module", "name": "b"}]}]}"#;
        assert!(matches!(parse_str(json), Err(Error::InvalidTree(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_str("{not json"), Err(Error::Json(_))));
    }
}
