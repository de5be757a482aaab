//! Package selection by module and package name.

use crate::error::{Error, Result};
use regex::Regex;
use std::str::FromStr;

/// Restricts which packages are rendered.
///
/// Parsed from `moduleRegex#packageRegex`. Both patterns must match the whole
/// name. Without a `#` the text is the package pattern and any module
/// matches.
#[derive(Debug, Clone)]
pub struct PackageFilter {
    module: Regex,
    package: Regex,
    source: String,
}

impl PackageFilter {
    /// Compile a filter expression.
    pub fn new(expression: &str) -> Result<Self> {
        let (module, package) = expression.split_once('#').unwrap_or((".*", expression));
        Ok(Self {
            module: compile_full_match(module)?,
            package: compile_full_match(package)?,
            source: expression.to_string(),
        })
    }

    /// Check a package's qualified name against the filter.
    ///
    /// `module` is the enclosing module's qualified name, empty when the
    /// package has no module.
    pub fn matches(&self, module: &str, package: &str) -> bool {
        self.module.is_match(module) && self.package.is_match(package)
    }

    /// The expression this filter was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for PackageFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

fn compile_full_match(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| Error::InvalidFilter {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_with_module_pattern() {
        let filter = PackageFilter::new("app\\..*#com\\.acme(\\..*)?").unwrap();
        assert!(filter.matches("app.core", "com.acme"));
        assert!(filter.matches("app.core", "com.acme.util"));
        assert!(!filter.matches("lib.core", "com.acme"));
        assert!(!filter.matches("app.core", "org.acme"));
    }

    #[test]
    fn test_filter_without_pound_sign_matches_any_module() {
        let filter: PackageFilter = "com\\.acme".parse().unwrap();
        assert!(filter.matches("", "com.acme"));
        assert!(filter.matches("anything", "com.acme"));
        assert!(!filter.matches("anything", "com.acme.util"));
    }

    #[test]
    fn test_filter_requires_full_match() {
        let filter = PackageFilter::new("acme").unwrap();
        assert!(!filter.matches("", "com.acme"));
        assert!(!filter.matches("", "acme.util"));
        assert!(filter.matches("", "acme"));

        let filter = PackageFilter::new("a|b").unwrap();
        assert!(filter.matches("", "a"));
        assert!(!filter.matches("", "ab"));
    }

    #[test]
    fn test_only_first_pound_sign_splits() {
        let filter = PackageFilter::new("m#p#q").unwrap();
        assert!(filter.matches("m", "p#q"));
        assert_eq!(filter.as_str(), "m#p#q");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PackageFilter::new("m#(unclosed");
        match result {
            Err(Error::InvalidFilter { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected InvalidFilter, got {:?}", other),
        }
    }
}
