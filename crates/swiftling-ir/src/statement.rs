use serde::Serialize;

use crate::support::{ConvertsToExpression, EnumElement, FunctionDecl, IfStmt, SwitchCase, VariableDecl};
use crate::Expression;

/// An IR statement (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    ImportDeclaration {
        name: String,
    },
    TypealiasDeclaration {
        identifier: String,
        type_name: String,
        is_implicit: bool,
    },
    ClassDeclaration {
        name: String,
        inherits: Vec<String>,
        members: Vec<Statement>,
    },
    StructDeclaration {
        name: String,
        inherits: Vec<String>,
        members: Vec<Statement>,
    },
    CompanionObject {
        members: Vec<Statement>,
    },
    EnumDeclaration {
        access: Option<String>,
        name: String,
        inherits: Vec<String>,
        elements: Vec<EnumElement>,
        members: Vec<Statement>,
        is_implicit: bool,
    },
    ProtocolDeclaration {
        name: String,
        members: Vec<Statement>,
    },
    ExtensionDeclaration {
        type_name: String,
        members: Vec<Statement>,
    },
    FunctionDeclaration(FunctionDecl),
    VariableDeclaration(VariableDecl),
    ForEachStatement {
        collection: Expression,
        variable: String,
        body: Vec<Statement>,
    },
    WhileStatement {
        expr: Expression,
        body: Vec<Statement>,
    },
    IfStatement(IfStmt),
    SwitchStatement {
        converts_to_expression: Option<ConvertsToExpression>,
        expr: Expression,
        cases: Vec<SwitchCase>,
    },
    DeferStatement {
        body: Vec<Statement>,
    },
    ThrowStatement {
        expr: Expression,
    },
    ReturnStatement {
        expr: Option<Expression>,
    },
    BreakStatement,
    ContinueStatement,
    AssignmentStatement {
        lhs: Expression,
        rhs: Expression,
    },
    Expression(Expression),
    Error,
}

impl Statement {
    /// `true` for declaration kinds the emitter separates from their
    /// neighbors with a blank line, except when both neighbors are of a
    /// "packs without blank lines" kind (spec §4.4).
    pub fn packs_without_blank_line_with(&self, other: &Statement) -> bool {
        use Statement::*;
        match (self, other) {
            (VariableDeclaration(_), VariableDeclaration(_)) => true,
            (TypealiasDeclaration { .. }, TypealiasDeclaration { .. }) => true,
            (AssignmentStatement { .. }, AssignmentStatement { .. }) => true,
            (Expression(a), Expression(b)) => {
                (a.is_call() && b.is_call())
                    || (a.is_template() && b.is_template())
                    || (a.is_literal_code() && b.is_literal_code())
            }
            _ => false,
        }
    }
}
