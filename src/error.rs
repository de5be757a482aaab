//! Error types for docmark library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a tree or generating pages.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The destination directory could not be created or is not a directory.
    #[error("Invalid destination directory {path}: {reason}")]
    Destination { path: PathBuf, reason: String },

    /// The overview file does not exist or is not readable.
    #[error("Overview file does not exist or is not readable: {0}")]
    Overview(PathBuf),

    /// The target-packages filter contains an invalid regular expression.
    #[error("Invalid target-packages filter '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rendered page could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The documentation tree JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The documentation tree is structurally invalid.
    #[error("Invalid documentation tree: {0}")]
    InvalidTree(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}
