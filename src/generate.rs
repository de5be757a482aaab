//! Two-phase page generation.
//!
//! Phase 1 builds the [`TypeDictionary`] from every included type. Phase 2
//! renders each page against the frozen dictionary; pages share nothing
//! mutable and may be rendered in parallel.

use crate::error::{Error, Result};
use crate::layout;
use crate::model::{DocTree, ElementId, ElementKind};
use crate::options::{GeneratorConfig, GeneratorOptions};
use crate::render::{MarkdownPage, PageStyle};
use crate::resolve::{DictionaryResolver, ReferenceResolver, TypeDictionary};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// One rendered page, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Element the page documents
    pub element: ElementId,
    /// Path relative to the destination directory
    pub path: PathBuf,
    pub style: PageStyle,
    pub content: String,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written, in tree order
    pub files: Vec<PathBuf>,
    pub type_pages: usize,
    pub index_pages: usize,
    /// Number of entries in the type dictionary
    pub dictionary_entries: usize,
}

impl GenerationReport {
    /// Total number of pages written.
    pub fn page_count(&self) -> usize {
        self.type_pages + self.index_pages
    }

    fn record(&mut self, style: PageStyle, path: PathBuf) {
        match style {
            PageStyle::Type => self.type_pages += 1,
            PageStyle::Index => self.index_pages += 1,
        }
        self.files.push(path);
    }
}

/// Turns a documentation tree into Markdown files.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Validate `options` and create a generator.
    pub fn new(options: &GeneratorOptions) -> Result<Self> {
        Ok(Self::with_config(options.validate()?))
    }

    /// Create a generator from an already validated configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The validated configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Elements that get a page, in tree order.
    ///
    /// Modules are always included. Packages must pass the filter; types
    /// must be documented and live in a package that passes it.
    pub fn included_elements(&self, tree: &DocTree) -> Vec<ElementId> {
        tree.iter()
            .filter(|&(id, element)| match element.kind {
                ElementKind::Module => true,
                ElementKind::Package => self.package_selected(tree, id),
                ElementKind::Type => {
                    element.visibility.is_documented() && self.package_selected(tree, id)
                }
                ElementKind::Field | ElementKind::Method | ElementKind::Constructor => false,
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Build the type dictionary over the included types.
    pub fn build_dictionary(&self, tree: &DocTree) -> TypeDictionary {
        TypeDictionary::build(tree, self.included_elements(tree))
    }

    /// Render every included page without touching the filesystem.
    pub fn render_pages(&self, tree: &DocTree) -> Result<Vec<RenderedPage>> {
        let included = self.included_elements(tree);

        let dictionary = Arc::new(TypeDictionary::build(tree, included.iter().copied()));
        log::debug!("Type dictionary: {:?}", dictionary);
        let resolver = DictionaryResolver::new(dictionary, self.config.base_path.clone());

        if self.config.parallel {
            included
                .par_iter()
                .map(|&id| self.render_page(tree, &resolver, id))
                .collect()
        } else {
            included
                .iter()
                .map(|&id| self.render_page(tree, &resolver, id))
                .collect()
        }
    }

    /// Render a single element's page.
    pub fn render_page(
        &self,
        tree: &DocTree,
        resolver: &dyn ReferenceResolver,
        id: ElementId,
    ) -> Result<RenderedPage> {
        let element = &tree[id];
        let path = layout::page_path(tree, id).ok_or_else(|| {
            Error::Render(format!("'{}' has no page of its own", element.name))
        })?;
        log::debug!("Rendering {}", path.display());

        let mut page = MarkdownPage::new(tree, id, resolver, &self.config.render)?;
        if element.kind == ElementKind::Module {
            if let Some(ref overview) = self.config.overview {
                page.set_overview(overview.as_str());
            }
        }
        if let Some(ref comment) = element.comment {
            page.set_comment(comment);
        }
        for (child, _) in tree
            .children(id)
            .filter(|&(child, _)| self.child_selected(tree, child))
        {
            page.add_child(child);
        }

        Ok(RenderedPage {
            element: id,
            path,
            style: page.style(),
            content: page.render(),
        })
    }

    /// Write one page below the destination directory.
    ///
    /// Returns the full path of the written file.
    pub fn write_page(&self, page: &RenderedPage) -> Result<PathBuf> {
        let path = self.config.destination.join(&page.path);
        if let Some(parent) = path.parent() {
            if !parent.is_dir() {
                log::info!("Creating directory {}", parent.display());
                fs::create_dir_all(parent).map_err(|source| Error::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(&path, &page.content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Render every page and write it to the destination directory.
    pub fn generate(&self, tree: &DocTree) -> Result<GenerationReport> {
        let pages = self.render_pages(tree)?;

        let mut report = GenerationReport {
            dictionary_entries: self.build_dictionary(tree).len(),
            ..GenerationReport::default()
        };
        for page in &pages {
            let path = self.write_page(page)?;
            report.record(page.style, path);
        }

        log::info!(
            "Wrote {} pages to {}",
            report.page_count(),
            self.config.destination.display()
        );
        Ok(report)
    }

    fn package_selected(&self, tree: &DocTree, id: ElementId) -> bool {
        let Some(ref filter) = self.config.filter else {
            return true;
        };
        let module = tree
            .module_of(id)
            .map_or("", |module| module.qualified_name.as_str());
        let package = tree
            .package_of(id)
            .map_or("", |package| package.qualified_name.as_str());
        filter.matches(module, package)
    }

    fn child_selected(&self, tree: &DocTree, id: ElementId) -> bool {
        let element = &tree[id];
        match element.kind {
            ElementKind::Package => self.package_selected(tree, id),
            _ => element.visibility.is_documented(),
        }
    }
}
