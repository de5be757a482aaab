//! Rendering options and configuration.

/// What to do with block tags that are not `@link`, `@see`, `@param` or
/// `@return`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Leave unknown tags out of the page
    #[default]
    Skip,
    /// Render them with the "(doc contains some error)" marker
    Marker,
}

/// Options for rendering pages.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Handling of unrecognized block tags, applied to page and member tags
    pub unknown_tags: UnknownTagPolicy,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-tag policy.
    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }
}
