//! Decodes a textual Swift-frontend AST dump into a `RawTree` (spec §3,
//! §4.1): a cursor-based tokenizer plus the grammar that assembles
//! parenthesized nodes out of standalone attributes, `key=value`
//! attributes, and nested children.

mod cursor;
mod decoder;
mod error;
mod raw_tree;

pub use decoder::{decode, Decoder};
pub use error::MalformedDump;
pub use raw_tree::{KeyValueAttrs, RawTree};
