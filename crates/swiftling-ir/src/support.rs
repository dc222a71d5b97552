use serde::Serialize;

use crate::{Expression, Statement};

/// A function or initializer declaration (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    /// The declared name, e.g. `foo` in `foo(x:y:)`, or `init` for
    /// constructors.
    pub prefix: String,
    pub parameters: Vec<FunctionParameter>,
    pub return_type: String,
    /// The full `(Params) -> Return` type string as read from the dump.
    pub function_type: String,
    pub is_implicit: bool,
    pub is_static: bool,
    pub is_mutating: bool,
    /// Set when this function is a member of an `extension` (spec §4.2).
    pub extends_type: Option<String>,
    /// `None` for protocol requirements with no body.
    pub statements: Option<Vec<Statement>>,
    pub access: Option<String>,
    pub annotations: Option<Vec<String>>,
}

/// A single parameter of a function or closure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionParameter {
    /// The internal (call-site) label.
    pub label: String,
    /// The external API label, when it differs from `label`.
    pub api_label: Option<String>,
    pub type_name: String,
    pub default_value: Option<Expression>,
}

/// A `var`/`let` declaration (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDecl {
    pub identifier: String,
    pub type_name: String,
    pub expression: Option<Expression>,
    pub getter: Option<Box<FunctionDecl>>,
    pub setter: Option<Box<FunctionDecl>>,
    pub is_let: bool,
    pub is_implicit: bool,
    pub is_static: bool,
    pub extends_type: Option<String>,
    pub annotations: Option<Vec<String>>,
}

impl VariableDecl {
    pub fn has_initializer(&self) -> bool {
        self.expression.is_some()
    }
}

/// One entry of an `if`/`guard` condition list: either a plain boolean
/// expression or an `if let`/`guard let` binding. Representing the list
/// as a single ordered `Vec<IfCondition>`, rather than two parallel
/// `conditions`/`declarations` vectors, is how this IR keeps invariant
/// (b) of spec §3 ("conditions and their let-declarations are in source
/// order") true by construction instead of by convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IfCondition {
    Expr(Expression),
    Let(VariableDecl),
}

/// An `if`/`guard` statement (spec §3, §4.2.1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub conditions: Vec<IfCondition>,
    pub statements: Vec<Statement>,
    pub else_statement: Option<Box<Statement>>,
    pub is_guard: bool,
}

impl IfStmt {
    /// The `let`/`var` bindings among `conditions`, in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &VariableDecl> {
        self.conditions.iter().filter_map(|c| match c {
            IfCondition::Let(decl) => Some(decl),
            IfCondition::Expr(_) => None,
        })
    }
}

/// One `case`/`default` arm of a `switch`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchCase {
    /// `None` for the default case.
    pub expression: Option<Expression>,
    pub statements: Vec<Statement>,
}

/// How a `switchStatement` is rewound back into an expression position
/// by the emitter (spec §4.4).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ConvertsToExpression {
    Return,
    Assignment(Box<Expression>),
    VariableDeclaration(String),
}

/// One case of an `enum` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumElement {
    /// Never contains `(` (invariant (c), spec §3).
    pub name: String,
    pub associated_values: Vec<LabeledType>,
    pub annotations: Option<Vec<String>>,
}

/// A labeled expression, e.g. one argument of a call or one element of a
/// tuple literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledExpression {
    pub label: Option<String>,
    pub expression: Expression,
}

/// A labeled type, e.g. one associated value of an enum case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledType {
    pub label: String,
    pub type_name: String,
}

/// How one position of a formal argument tuple was filled by a
/// `Tuple Shuffle Expression` (spec §4.2.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TupleShuffleIndex {
    Absent,
    Present,
    Variadic { count: usize },
}
