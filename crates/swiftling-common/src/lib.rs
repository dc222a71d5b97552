//! Shared types used across the transpiler pipeline: source spans, the
//! AST-dump node-name abbreviation table, and the `SourceFile` trait used
//! to resolve `// kotlin: ...` comment directives.

pub mod abbrev;
pub mod source_file;
pub mod span;

pub use abbrev::expand_node_name;
pub use source_file::{CommentDirective, SourceFile};
pub use span::{LineIndex, Span};
