//! Lowers a decoded Swift AST dump (`RawTree`) into the `swiftling-ir`
//! intermediate representation (spec §4.2).
//!
//! [`translate`] is the crate's entry point, used by the driver's
//! `irFromSwiftAst` (spec §4.6). Everything else -- the dispatch
//! tables, the pattern-binding queue, comment-directive handling, type
//! cleanup -- exists to serve that one function.

pub mod comments;
pub mod context;
mod dispatch;
pub mod error;
pub mod location;
pub mod pattern_binding;
pub mod type_clean;

pub use context::TranslationContext;
pub use dispatch::expressions::translate_expression;
pub use dispatch::statements::translate_statement;
pub use error::{TranslationError, TranslationErrorKind};

use swiftling_decoder::RawTree;
use swiftling_diag::FailFast;
use swiftling_ir::TranslationUnit;

use crate::comments::{insertions_between, is_ignored, node_span};
use crate::dispatch::statements::{enqueue_pattern_binding, top_level_code_statements};

/// Translate a decoded `Source File` dump into a `TranslationUnit`: the
/// file's top-level statements in source order, with `Top Level Code
/// Declaration` blocks inlined and comment-directive insertions spliced
/// into the gaps between siblings (spec §4.2, §4.2.2).
pub fn translate(
    source_file: &RawTree,
    ctx: &mut TranslationContext,
) -> Result<TranslationUnit, FailFast> {
    let outer_queue = std::mem::take(&mut ctx.pending_bindings);
    let mut statements = Vec::new();
    let mut prev_end_line: Option<u32> = None;

    for child in &source_file.children {
        let span = node_span(child);
        if let (Some(prev), Some(s)) = (prev_end_line, span) {
            statements.extend(insertions_between(prev, s.start_line, false, ctx.source_file));
        }
        if let Some(s) = span {
            prev_end_line = Some(s.end_line);
        }

        if is_ignored(child, ctx.source_file) {
            continue;
        }

        match child.name.as_str() {
            "Top Level Code Declaration" => {
                statements.extend(top_level_code_statements(child, ctx)?);
            }
            "Pattern Binding Declaration" => {
                enqueue_pattern_binding(child, ctx)?;
            }
            _ => statements.push(translate_statement(child, ctx)?),
        }
    }

    ctx.pending_bindings = outer_queue;
    Ok(TranslationUnit::new(statements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftling_common::NoComments;
    use swiftling_decoder::decode;
    use swiftling_ir::Statement;

    #[test]
    fn translates_a_small_source_file() {
        let src = r#"(source_file
            (import_decl name=Foundation)
            (top_level_code_decl (brace_stmt (return_stmt (integer_literal_expr value="1")))))"#;
        let tree = decode(src).unwrap();
        let sf = NoComments;
        let mut ctx = TranslationContext::new(&sf);
        let unit = translate(&tree, &mut ctx).unwrap();
        assert_eq!(
            unit.statements,
            vec![
                Statement::ImportDeclaration { name: "Foundation".into() },
                Statement::ReturnStatement { expr: Some(swiftling_ir::Expression::LiteralInt(1)) },
            ]
        );
    }

    #[test]
    fn top_level_pattern_binding_reattaches_to_following_variable_declaration() {
        let src = r#"(source_file
            (pattern_binding_decl
                (pattern_named name=x type=Int)
                (integer_literal_expr value="3"))
            (var_decl let name=x type=Int))"#;
        let tree = decode(src).unwrap();
        let sf = NoComments;
        let mut ctx = TranslationContext::new(&sf);
        let unit = translate(&tree, &mut ctx).unwrap();
        assert_eq!(unit.statements.len(), 1);
        match &unit.statements[0] {
            Statement::VariableDeclaration(v) => {
                assert_eq!(v.identifier, "x");
                assert_eq!(v.expression, Some(swiftling_ir::Expression::LiteralInt(3)));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
