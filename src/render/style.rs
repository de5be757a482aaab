//! Page-style dispatch.

use super::MarkdownPage;
use crate::model::ElementKind;

/// Rendering strategy for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageStyle {
    /// Detail page of a type with one section per member
    Type,
    /// Index page of a module or package listing its contents
    Index,
}

impl PageStyle {
    /// Style of the page documenting an element of `kind`.
    ///
    /// Members are rendered as sections of their type's page and have no
    /// page of their own.
    pub fn for_kind(kind: ElementKind) -> Option<Self> {
        match kind {
            ElementKind::Type => Some(PageStyle::Type),
            ElementKind::Module | ElementKind::Package => Some(PageStyle::Index),
            ElementKind::Field | ElementKind::Method | ElementKind::Constructor => None,
        }
    }

    /// Whether a child of `kind` is rendered by this style.
    pub fn accepts(self, kind: ElementKind) -> bool {
        match self {
            PageStyle::Type => kind.is_member(),
            PageStyle::Index => matches!(kind, ElementKind::Type | ElementKind::Package),
        }
    }

    /// Render a page with this style.
    pub fn render(self, page: &MarkdownPage<'_>) -> String {
        match self {
            PageStyle::Type => page.render_as_type_page(),
            PageStyle::Index => page.render_as_index_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_for_kind() {
        assert_eq!(PageStyle::for_kind(ElementKind::Type), Some(PageStyle::Type));
        assert_eq!(PageStyle::for_kind(ElementKind::Module), Some(PageStyle::Index));
        assert_eq!(PageStyle::for_kind(ElementKind::Package), Some(PageStyle::Index));
        assert_eq!(PageStyle::for_kind(ElementKind::Method), None);
        assert_eq!(PageStyle::for_kind(ElementKind::Field), None);
        assert_eq!(PageStyle::for_kind(ElementKind::Constructor), None);
    }

    #[test]
    fn test_style_accepts() {
        assert!(PageStyle::Type.accepts(ElementKind::Method));
        assert!(PageStyle::Type.accepts(ElementKind::Constructor));
        assert!(PageStyle::Type.accepts(ElementKind::Field));
        assert!(!PageStyle::Type.accepts(ElementKind::Type));
        assert!(!PageStyle::Type.accepts(ElementKind::Package));

        assert!(PageStyle::Index.accepts(ElementKind::Type));
        assert!(PageStyle::Index.accepts(ElementKind::Package));
        assert!(!PageStyle::Index.accepts(ElementKind::Method));
        assert!(!PageStyle::Index.accepts(ElementKind::Module));
    }
}
