//! Generator options and configuration.

use crate::error::{Error, Result};
use crate::filter::PackageFilter;
use crate::render::{RenderOptions, UnknownTagPolicy};
use crate::resolve::BasePath;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a generation run, as accepted from the command line.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Directory the pages are written to
    pub destination: PathBuf,

    /// File whose contents become the overview of every module page
    pub overview: Option<PathBuf>,

    /// Prefix rooting every resolved cross-reference link
    pub base_path: String,

    /// `moduleRegex#packageRegex` restricting the rendered packages
    pub target_packages: Option<String>,

    /// Page rendering options
    pub render: RenderOptions,

    /// Whether to render pages in parallel
    pub parallel: bool,
}

impl GeneratorOptions {
    /// Create options writing to `destination`.
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// Set the overview file.
    pub fn with_overview(mut self, path: impl Into<PathBuf>) -> Self {
        self.overview = Some(path.into());
        self
    }

    /// Set the base path for resolved links.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Set the package filter expression.
    pub fn with_target_packages(mut self, expression: impl Into<String>) -> Self {
        self.target_packages = Some(expression.into());
        self
    }

    /// Set the unknown-tag policy.
    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.render = self.render.with_unknown_tags(policy);
        self
    }

    /// Enable or disable parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the options before anything is rendered.
    ///
    /// Creates the destination directory if it is missing, reads the
    /// overview file and compiles the package filter.
    pub fn validate(&self) -> Result<GeneratorConfig> {
        ensure_destination(&self.destination)?;

        let overview = match self.overview {
            Some(ref path) => Some(read_overview(path)?),
            None => None,
        };

        let filter = self
            .target_packages
            .as_deref()
            .map(PackageFilter::new)
            .transpose()?;

        Ok(GeneratorConfig {
            destination: self.destination.clone(),
            overview,
            base_path: BasePath::new(&self.base_path),
            filter,
            render: self.render.clone(),
            parallel: self.parallel,
        })
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            destination: PathBuf::from("."),
            overview: None,
            base_path: "/".to_string(),
            target_packages: None,
            render: RenderOptions::default(),
            parallel: true,
        }
    }
}

/// Validated configuration, produced by [`GeneratorOptions::validate`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub destination: PathBuf,
    /// Overview text, already read from disk
    pub overview: Option<String>,
    pub base_path: BasePath,
    pub filter: Option<PackageFilter>,
    pub render: RenderOptions,
    pub parallel: bool,
}

fn ensure_destination(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::Destination {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    if !path.exists() {
        log::info!("Creating destination directory {}", path.display());
        fs::create_dir_all(path).map_err(|e| Error::Destination {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

fn read_overview(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::Overview(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|_| Error::Overview(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_options_builder() {
        let options = GeneratorOptions::new("out")
            .with_base_path("/docs")
            .with_target_packages("m#p")
            .with_unknown_tags(UnknownTagPolicy::Marker)
            .sequential();

        assert_eq!(options.destination, PathBuf::from("out"));
        assert_eq!(options.base_path, "/docs");
        assert_eq!(options.target_packages.as_deref(), Some("m#p"));
        assert_eq!(options.render.unknown_tags, UnknownTagPolicy::Marker);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = GeneratorOptions::default();
        assert!(options.parallel);
        assert_eq!(options.base_path, "/");
        assert!(options.overview.is_none());
    }

    #[test]
    fn test_validate_creates_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("a").join("b");
        let config = GeneratorOptions::new(&destination)
            .with_base_path("docs//api")
            .validate()
            .unwrap();

        assert!(destination.is_dir());
        assert_eq!(config.base_path.as_str(), "docs/api/");
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_validate_rejects_file_destination() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let result = GeneratorOptions::new(&file).validate();
        assert!(matches!(result, Err(Error::Destination { .. })));
    }

    #[test]
    fn test_validate_reads_overview() {
        let dir = tempfile::tempdir().unwrap();
        let overview = dir.path().join("overview.md");
        fs::write(&overview, "Project overview.").unwrap();

        let config = GeneratorOptions::new(dir.path().join("out"))
            .with_overview(&overview)
            .validate()
            .unwrap();
        assert_eq!(config.overview.as_deref(), Some("Project overview."));
    }

    #[test]
    fn test_validate_rejects_missing_overview() {
        let dir = tempfile::tempdir().unwrap();
        let result = GeneratorOptions::new(dir.path())
            .with_overview(dir.path().join("missing.md"))
            .validate();
        assert!(matches!(result, Err(Error::Overview(_))));
    }

    #[test]
    fn test_validate_rejects_bad_filter() {
        let dir = tempfile::tempdir().unwrap();
        let result = GeneratorOptions::new(dir.path())
            .with_target_packages("[")
            .validate();
        assert!(matches!(result, Err(Error::InvalidFilter { .. })));
    }
}
