//! Comment-directive handling (spec §4.2.2).
//!
//! Every translation consults the source file's line associated with the
//! subtree's `range` key. Recognized directives:
//! - `kotlin: ignore` on a declaration -- skip it and its children.
//! - `kotlin: value <text>` on an expression -- replace it wholesale.
//! - `kotlin: insert <text>` / `kotlin: declaration <text>` interleaved
//!   between siblings of a brace/declaration scope -- materialize an
//!   inserted statement at that position.

use swiftling_common::{CommentDirective, SourceFile, Span};
use swiftling_decoder::RawTree;
use swiftling_ir::{Expression, Statement};

use crate::location::parse_range;

/// The span associated with `tree`'s `range` attribute, if present and
/// parseable.
pub fn node_span(tree: &RawTree) -> Option<Span> {
    tree.attribute("range").and_then(parse_range)
}

fn directive_for(tree: &RawTree, source_file: &dyn SourceFile) -> Option<CommentDirective> {
    let span = node_span(tree)?;
    source_file.directive_at(span.end_line)
}

/// `true` if `tree` carries a `kotlin: ignore` directive: the node and
/// all of its children should be skipped entirely.
pub fn is_ignored(tree: &RawTree, source_file: &dyn SourceFile) -> bool {
    matches!(directive_for(tree, source_file), Some(d) if d.key == "ignore")
}

/// The replacement expression for a `kotlin: value <text>` directive on
/// `tree`, if present.
pub fn value_override(tree: &RawTree, source_file: &dyn SourceFile) -> Option<Expression> {
    let directive = directive_for(tree, source_file)?;
    if directive.key == "value" {
        Some(Expression::LiteralCodeExpression(directive.value))
    } else {
        None
    }
}

/// Scan every line strictly between `prev.end_line` and `next.start_line`
/// for `kotlin: insert <text>` directives (inside a brace scope) or
/// `kotlin: declaration <text>` directives (inside a declaration scope),
/// and materialize each as an inserted statement, in line order.
pub fn insertions_between(
    prev_end_line: u32,
    next_start_line: u32,
    in_declaration_scope: bool,
    source_file: &dyn SourceFile,
) -> Vec<Statement> {
    let wanted_key = if in_declaration_scope {
        "declaration"
    } else {
        "insert"
    };
    let mut inserted = Vec::new();
    if next_start_line <= prev_end_line + 1 {
        return inserted;
    }
    for line in (prev_end_line + 1)..next_start_line {
        if let Some(directive) = source_file.directive_at(line) {
            if directive.key == wanted_key {
                inserted.push(Statement::Expression(Expression::LiteralCodeExpression(
                    directive.value,
                )));
            }
        }
    }
    inserted
}
