//! Markdown page rendering.

use super::{PageStyle, RenderOptions, UnknownTagPolicy};
use crate::error::{Error, Result};
use crate::layout;
use crate::model::{DocComment, DocTree, DocumentedElement, ElementId, ElementKind};
use crate::resolve::ReferenceResolver;
use crate::tag::{Tag, TagKind, TBD};
use crate::text;

/// Name rendered for every constructor, escaped for Markdown raw HTML.
pub const CONSTRUCTOR_NAME: &str = "&lt;&lt;init&gt;&gt;";

/// Return type rendered for constructors.
pub const NO_RETURN_TYPE: &str = "(none)";

/// One Markdown page documenting a module, package or type.
///
/// The page holds its resolver as an injected capability; it never looks
/// anything up outside of the tree and the resolver it was built with.
pub struct MarkdownPage<'a> {
    tree: &'a DocTree,
    target: ElementId,
    style: PageStyle,
    resolver: &'a dyn ReferenceResolver,
    options: &'a RenderOptions,
    title: String,
    overview: Option<String>,
    body: Option<String>,
    tags: Vec<Tag>,
    children: Vec<ElementId>,
}

impl<'a> MarkdownPage<'a> {
    /// Create a page for `target`, titled after its kind and display name.
    ///
    /// Fails for members, which are rendered inside their type's page.
    pub fn new(
        tree: &'a DocTree,
        target: ElementId,
        resolver: &'a dyn ReferenceResolver,
        options: &'a RenderOptions,
    ) -> Result<Self> {
        let element = tree
            .get(target)
            .ok_or_else(|| Error::Render(format!("unknown element #{}", target.index())))?;
        let style = PageStyle::for_kind(element.kind).ok_or_else(|| {
            Error::Render(format!(
                "{} '{}' has no page of its own",
                element.kind.label().to_lowercase(),
                element.name
            ))
        })?;

        let mut page = Self {
            tree,
            target,
            style,
            resolver,
            options,
            title: String::new(),
            overview: None,
            body: None,
            tags: Vec::new(),
            children: Vec::new(),
        };
        page.set_title(element.kind, tree.display_name(target));
        Ok(page)
    }

    /// Set the title to `<KIND>: `name``.
    pub fn set_title(&mut self, kind: ElementKind, name: &str) -> &mut Self {
        self.title = format!("{}: `{}`", kind, name);
        self
    }

    /// Set the overview paragraph (module pages).
    pub fn set_overview(&mut self, overview: impl Into<String>) -> &mut Self {
        self.overview = Some(overview.into());
        self
    }

    /// Take body and block tags from a documentation comment.
    pub fn set_comment(&mut self, comment: &DocComment) -> &mut Self {
        let body = text::comment_body(&comment.body);
        self.body = (!body.is_empty()).then_some(body);
        self.tags = comment.tags.iter().map(Tag::from).collect();
        self
    }

    /// Add a child element. No filtering is applied here.
    pub fn add_child(&mut self, child: ElementId) -> &mut Self {
        self.children.push(child);
        self
    }

    /// The element this page documents.
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// The rendering strategy chosen for this page.
    pub fn style(&self) -> PageStyle {
        self.style
    }

    /// Render the page.
    pub fn render(&self) -> String {
        self.style.render(self)
    }

    /// Render as a type detail page: preamble plus one section per member.
    pub fn render_as_type_page(&self) -> String {
        let mut output = self.render_common_part();

        let mut members: Vec<&DocumentedElement> = self
            .children
            .iter()
            .map(|&id| &self.tree[id])
            .filter(|member| PageStyle::Type.accepts(member.kind))
            .collect();
        members.sort_by_cached_key(|member| (member.kind, member.name.clone(), render_params(member)));

        for member in members {
            output.push_str(&render_anchor(member));
            output.push_str(&render_section_title(member));

            match member.comment.as_ref().filter(|comment| !comment.is_empty()) {
                Some(comment) => {
                    output.push('\n');
                    output.push_str(&text::comment_body(&comment.body));
                    output.push_str("\n\n");
                    for tag in comment.tags.iter().map(Tag::from) {
                        self.render_tag(&mut output, &tag);
                    }
                    output.push('\n');
                }
                None => output.push_str(&format!("\n{}\n\n", TBD)),
            }
        }

        output
    }

    /// Render as an index page listing enclosed types and packages.
    pub fn render_as_index_page(&self) -> String {
        let mut output = self.render_common_part();

        output.push_str("# Enclosed Elements\n");
        for &id in &self.children {
            let element = &self.tree[id];
            if element.parent() != Some(self.target) {
                log::debug!("Skipping '{}': not enclosed by this page's element", element.name);
                continue;
            }
            match element.kind {
                ElementKind::Type => {
                    output.push_str(&format!(
                        "- **{}:** [{}]({})\n",
                        element.kind,
                        self.tree.nested_type_name(id),
                        layout::type_link(self.tree, id)
                    ));
                }
                ElementKind::Package => {
                    output.push_str(&format!(
                        "- **{}:** [{}]({})\n",
                        element.kind,
                        element.qualified_name,
                        layout::package_link(&element.qualified_name)
                    ));
                }
                kind => {
                    log::warn!(
                        "Ignoring unsupported element on index page: {} '{}'",
                        kind.label().to_lowercase(),
                        element.name
                    );
                }
            }
        }
        output.push('\n');

        output
    }

    fn render_common_part(&self) -> String {
        let mut output = format!("# {}\n\n", self.title);
        if let Some(ref overview) = self.overview {
            output.push_str(overview);
            output.push_str("\n\n");
        }
        if let Some(ref body) = self.body {
            output.push_str(body);
            output.push_str("\n\n");
        }
        output.push('\n');
        for tag in &self.tags {
            self.render_tag(&mut output, tag);
        }
        output.push('\n');
        output
    }

    fn render_tag(&self, output: &mut String, tag: &Tag) {
        if tag.kind == TagKind::Unknown && self.options.unknown_tags == UnknownTagPolicy::Skip {
            return;
        }
        output.push_str(&format!(
            "+ **{}:** {}\n",
            tag.kind,
            tag.format(self.resolver)
        ));
    }
}

/// Name used for a member's anchor and heading.
fn member_name(member: &DocumentedElement) -> &str {
    match member.kind {
        ElementKind::Constructor => CONSTRUCTOR_NAME,
        _ => &member.name,
    }
}

fn render_anchor(member: &DocumentedElement) -> String {
    format!("<a id=\"{}\"></a>\n", member_name(member))
}

fn render_section_title(member: &DocumentedElement) -> String {
    if member.kind.is_executable() {
        let return_type = match member.kind {
            ElementKind::Constructor => NO_RETURN_TYPE.to_string(),
            _ => text::simple_type_name(member.type_name.as_deref().unwrap_or("void")),
        };
        return format!(
            "## **{}:** `{}` {}({})\n",
            member.kind,
            return_type,
            member_name(member),
            render_params(member)
        );
    }

    match member.type_name.as_deref() {
        Some(type_name) => format!(
            "## **{}:** `{}` {}\n",
            member.kind,
            text::simple_type_name(type_name),
            member_name(member)
        ),
        None => format!("## **{}:** {}\n", member.kind, member_name(member)),
    }
}

/// `` `Type` `name` `` pairs joined by `, `.
fn render_params(member: &DocumentedElement) -> String {
    member
        .params
        .iter()
        .map(|p| format!("`{}` `{}`", text::simple_type_name(&p.type_name), p.name))
        .collect::<Vec<_>>()
        .join(", ")
}
