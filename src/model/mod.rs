//! Documentation tree types.
//!
//! This module defines the in-memory representation supplied by the host
//! toolchain: modules, packages, types and their members, each with an
//! optional documentation comment. The model is language-agnostic and is
//! read-only once page generation begins.

mod comment;
mod element;
mod tree;

pub use comment::{DocComment, RawTag};
pub use element::{DocumentedElement, ElementId, ElementKind, Parameter, Visibility};
pub use tree::{Ancestors, DocTree};
