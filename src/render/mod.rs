//! Rendering of pages and the type dictionary.

mod json;
mod options;
mod page;
mod style;

pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, UnknownTagPolicy};
pub use page::{MarkdownPage, CONSTRUCTOR_NAME, NO_RETURN_TYPE};
pub use style::PageStyle;
