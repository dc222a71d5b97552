//! The intermediate representation (spec §3): two mutually recursive
//! tagged sums, `Statement` and `Expression`, plus the supporting
//! records each one's variants carry.

mod expression;
mod statement;
mod support;

pub use expression::Expression;
pub use statement::Statement;
pub use support::{
    ConvertsToExpression, EnumElement, FunctionDecl, FunctionParameter, IfCondition, IfStmt,
    LabeledExpression, LabeledType, SwitchCase, TupleShuffleIndex, VariableDecl,
};

/// The output of a full translation: the top-level statements of one
/// source file, in source order. This is the unit `irAfterPasses` (spec
/// §4.6) rewrites and the Emitter renders.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct TranslationUnit {
    pub statements: Vec<Statement>,
}

impl TranslationUnit {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn if_stmt_declarations_preserves_source_order() {
        let if_stmt = IfStmt {
            conditions: vec![
                IfCondition::Expr(Expression::LiteralBool(true)),
                IfCondition::Let(VariableDecl {
                    identifier: "x".into(),
                    type_name: "Int".into(),
                    expression: Some(Expression::LiteralInt(1)),
                    getter: None,
                    setter: None,
                    is_let: true,
                    is_implicit: false,
                    is_static: false,
                    extends_type: None,
                    annotations: None,
                }),
                IfCondition::Let(VariableDecl {
                    identifier: "y".into(),
                    type_name: "Int".into(),
                    expression: Some(Expression::LiteralInt(2)),
                    getter: None,
                    setter: None,
                    is_let: true,
                    is_implicit: false,
                    is_static: false,
                    extends_type: None,
                    annotations: None,
                }),
            ],
            statements: vec![],
            else_statement: None,
            is_guard: false,
        };
        let names: Vec<_> = if_stmt.declarations().map(|d| d.identifier.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn statement_packing_rules() {
        let a = Statement::VariableDeclaration(VariableDecl {
            identifier: "a".into(),
            type_name: "Int".into(),
            expression: None,
            getter: None,
            setter: None,
            is_let: true,
            is_implicit: false,
            is_static: false,
            extends_type: None,
            annotations: None,
        });
        let b = a.clone();
        assert!(a.packs_without_blank_line_with(&b));

        let c = Statement::BreakStatement;
        assert!(!a.packs_without_blank_line_with(&c));
    }
}
