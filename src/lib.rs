//! # docmark
//!
//! Markdown documentation generator for documented program elements.
//!
//! The library turns a tree of modules, packages, types and their members
//! into cross-linked Markdown pages. Type references in `@see` tags are
//! resolved through a type dictionary that is built before any page is
//! rendered.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docmark::{load_tree, Generator, GeneratorOptions};
//!
//! fn main() -> docmark::Result<()> {
//!     // Load a documentation tree exported by the host toolchain
//!     let tree = load_tree("tree.json")?;
//!
//!     // Render and write every page
//!     let options = GeneratorOptions::new("docs").with_base_path("/api");
//!     let report = Generator::new(&options)?.generate(&tree)?;
//!     println!("{} pages written", report.page_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two-phase resolution**: type dictionary first, then pages
//! - **Deterministic output**: members ordered by kind, name and parameters
//! - **Package filter**: `moduleRegex#packageRegex`
//! - **Parallel rendering**: Uses Rayon for independent pages

pub mod error;
pub mod filter;
pub mod generate;
pub mod layout;
pub mod model;
pub mod options;
pub mod parser;
pub mod render;
pub mod resolve;
pub mod tag;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use filter::PackageFilter;
pub use generate::{GenerationReport, Generator, RenderedPage};
pub use model::{
    DocComment, DocTree, DocumentedElement, ElementId, ElementKind, Parameter, RawTag, Visibility,
};
pub use options::{GeneratorConfig, GeneratorOptions};
pub use render::{JsonFormat, MarkdownPage, PageStyle, RenderOptions, UnknownTagPolicy};
pub use resolve::{BasePath, DictionaryResolver, ReferenceResolver, TypeDictionary};
pub use tag::{Tag, TagKind};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a documentation tree from a JSON file.
///
/// # Example
///
/// ```no_run
/// use docmark::load_tree;
///
/// let tree = load_tree("tree.json").unwrap();
/// println!("Elements: {}", tree.len());
/// ```
pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<DocTree> {
    let file = File::open(path)?;
    parser::parse_reader(BufReader::new(file))
}

/// Load a documentation tree from a JSON string.
pub fn load_tree_str(json: &str) -> Result<DocTree> {
    parser::parse_str(json)
}

/// Build the type dictionary of a tree, optionally restricted to the
/// packages matching a `moduleRegex#packageRegex` filter.
///
/// # Example
///
/// ```no_run
/// use docmark::{build_dictionary, load_tree};
///
/// let tree = load_tree("tree.json").unwrap();
/// let dictionary = build_dictionary(&tree, Some("app#com\\.acme\\..*")).unwrap();
/// println!("{}", docmark::render::to_json(&dictionary, docmark::JsonFormat::Pretty).unwrap());
/// ```
pub fn build_dictionary(tree: &DocTree, target_packages: Option<&str>) -> Result<TypeDictionary> {
    let config = GeneratorConfig {
        destination: Default::default(),
        overview: None,
        base_path: BasePath::default(),
        filter: target_packages.map(PackageFilter::new).transpose()?,
        render: RenderOptions::default(),
        parallel: false,
    };
    Ok(Generator::with_config(config).build_dictionary(tree))
}

/// Generate pages for the tree stored at `tree_path` into `destination`.
///
/// # Example
///
/// ```no_run
/// let report = docmark::generate("tree.json", "docs").unwrap();
/// assert!(report.page_count() > 0);
/// ```
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    tree_path: P,
    destination: Q,
) -> Result<GenerationReport> {
    let tree = load_tree(tree_path)?;
    let options = GeneratorOptions::new(destination.as_ref());
    Generator::new(&options)?.generate(&tree)
}

/// Builder for loading a tree and generating its pages.
///
/// # Example
///
/// ```no_run
/// use docmark::Docmark;
///
/// let report = Docmark::new()
///     .with_base_path("/api")
///     .with_target_packages("app#com\\.acme(\\..*)?")
///     .sequential()
///     .load("tree.json")?
///     .generate("docs")?;
/// # Ok::<(), docmark::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Docmark {
    options: GeneratorOptions,
}

impl Docmark {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path for resolved links.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.options = self.options.with_base_path(base_path);
        self
    }

    /// Set the overview file used on module pages.
    pub fn with_overview(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_overview(path);
        self
    }

    /// Set the package filter expression.
    pub fn with_target_packages(mut self, expression: impl Into<String>) -> Self {
        self.options = self.options.with_target_packages(expression);
        self
    }

    /// Set the unknown-tag policy.
    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.options = self.options.with_unknown_tags(policy);
        self
    }

    /// Disable parallel rendering.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Load a tree from a JSON file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<DocmarkSession> {
        Ok(DocmarkSession {
            tree: load_tree(path)?,
            options: self.options,
        })
    }

    /// Use an already built tree.
    pub fn with_tree(self, tree: DocTree) -> DocmarkSession {
        DocmarkSession {
            tree,
            options: self.options,
        }
    }
}

/// A loaded tree together with the options to render it with.
#[derive(Debug, Clone)]
pub struct DocmarkSession {
    tree: DocTree,
    options: GeneratorOptions,
}

impl DocmarkSession {
    /// Write every page into `destination`.
    pub fn generate<P: AsRef<Path>>(&self, destination: P) -> Result<GenerationReport> {
        let options = GeneratorOptions {
            destination: destination.as_ref().to_path_buf(),
            ..self.options.clone()
        };
        Generator::new(&options)?.generate(&self.tree)
    }

    /// The type dictionary the pages are resolved against.
    pub fn dictionary(&self) -> Result<TypeDictionary> {
        build_dictionary(&self.tree, self.options.target_packages.as_deref())
    }

    /// Get the tree.
    pub fn tree(&self) -> &DocTree {
        &self.tree
    }
}
