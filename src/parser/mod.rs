//! Loading documentation trees supplied by the host toolchain.

pub mod json;

pub use json::{parse_reader, parse_str, CommentDef, NodeDef, TreeFile};
