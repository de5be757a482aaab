//! Output file layout.
//!
//! ```text
//! <dest>/<module>/<package>/<Outer.Inner>.md   one per type
//! <dest>/<module>/<package>/README.md          package index
//! <dest>/<module>/README.md                    module index
//! ```

use crate::model::{DocTree, ElementId, ElementKind};
use std::path::PathBuf;

/// Name used when an element has no enclosing module or package.
pub const MISSING_NAME: &str = "(none)";

/// File name of index pages.
pub const INDEX_FILE: &str = "README.md";

/// Extension of every generated page.
pub const PAGE_EXTENSION: &str = "md";

/// Name of the enclosing module's directory.
pub fn module_name(tree: &DocTree, id: ElementId) -> &str {
    tree.module_of(id)
        .map_or(MISSING_NAME, |module| module.qualified_name.as_str())
}

/// Name of the enclosing package's directory.
pub fn package_name(tree: &DocTree, id: ElementId) -> &str {
    tree.package_of(id)
        .map_or(MISSING_NAME, |package| package.qualified_name.as_str())
}

/// Location of a type relative to the documentation root, without extension.
///
/// This is the value stored in the type dictionary.
pub fn type_location(tree: &DocTree, id: ElementId) -> String {
    format!(
        "{}/{}/{}",
        module_name(tree, id),
        package_name(tree, id),
        tree.nested_type_name(id)
    )
}

/// Relative link from a package index to one of its types.
pub fn type_link(tree: &DocTree, id: ElementId) -> String {
    format!("{}.{}", tree.nested_type_name(id), PAGE_EXTENSION)
}

/// Relative link from a module index to one of its packages.
pub fn package_link(package: &str) -> String {
    format!("{}/", package)
}

/// Path of an element's page relative to the destination directory.
///
/// Members have no page of their own and yield `None`.
pub fn page_path(tree: &DocTree, id: ElementId) -> Option<PathBuf> {
    let module_dir = PathBuf::from(module_name(tree, id));
    match tree[id].kind {
        ElementKind::Module => Some(module_dir.join(INDEX_FILE)),
        ElementKind::Package => Some(module_dir.join(package_name(tree, id)).join(INDEX_FILE)),
        ElementKind::Type => Some(
            module_dir
                .join(package_name(tree, id))
                .join(type_link(tree, id)),
        ),
        ElementKind::Field | ElementKind::Method | ElementKind::Constructor => None,
    }
}
