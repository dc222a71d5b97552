use serde::Serialize;

use crate::support::{FunctionParameter, LabeledExpression, TupleShuffleIndex};
use crate::Statement;

/// An IR expression (spec §3). Recurses into `Statement` only through
/// `ClosureExpression`'s body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    LiteralInt(i64),
    LiteralUInt(u64),
    LiteralDouble(f64),
    LiteralFloat(f32),
    LiteralBool(bool),
    LiteralString(String),
    LiteralCharacter(char),
    LiteralNil,

    /// A string with embedded `\(...)` interpolations. Each part is
    /// either a `LiteralString` text segment or a general expression;
    /// an empty `LiteralString("")` segment is a sentinel meaning "no
    /// literal text here" and is skipped by the emitter (spec §4.4).
    InterpolatedStringLiteral(Vec<Expression>),

    ArrayExpression {
        elements: Vec<Expression>,
        type_name: String,
    },
    DictionaryExpression {
        keys: Vec<Expression>,
        values: Vec<Expression>,
        type_name: String,
    },
    TupleExpression(Vec<LabeledExpression>),
    TupleShuffleExpression {
        labels: Vec<String>,
        indices: Vec<TupleShuffleIndex>,
        expressions: Vec<Expression>,
    },

    DeclarationReferenceExpression {
        identifier: String,
        type_name: String,
        is_standard_library: bool,
        is_implicit: bool,
    },
    TypeExpression {
        type_name: String,
    },
    DotExpression {
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    SubscriptExpression {
        subscripted: Box<Expression>,
        index: Box<Expression>,
        type_name: String,
    },
    BinaryOperatorExpression {
        lhs: Box<Expression>,
        rhs: Box<Expression>,
        operator: String,
        type_name: String,
    },
    PrefixUnaryExpression {
        expr: Box<Expression>,
        operator: String,
        type_name: String,
    },
    PostfixUnaryExpression {
        expr: Box<Expression>,
        operator: String,
        type_name: String,
    },
    CallExpression {
        function: Box<Expression>,
        parameters: Box<Expression>,
        type_name: String,
    },
    ClosureExpression {
        parameters: Vec<FunctionParameter>,
        statements: Vec<Statement>,
        type_name: String,
    },
    ParenthesesExpression(Box<Expression>),
    ForceValueExpression(Box<Expression>),
    OptionalExpression(Box<Expression>),

    /// A pattern string with named placeholders plus a mapping from
    /// placeholder to the sub-expression that should be substituted in
    /// (spec §3, §4.4). Used to inject idiomatic Kotlin for specific
    /// Swift APIs (e.g. range literals).
    TemplateExpression {
        pattern: String,
        matches: Vec<(String, Expression)>,
    },
    /// Verbatim Kotlin text from a `// kotlin: value ...` directive
    /// (spec §4.2.2).
    LiteralCodeExpression(String),
    /// Verbatim Kotlin text substituted for an entire declaration from a
    /// `// kotlin: declaration ...` directive.
    LiteralDeclarationExpression(String),

    Error,
}

impl Expression {
    /// `true` for the node kinds the emitter packs together without
    /// blank lines when they appear as consecutive top-level statements
    /// (spec §4.4: "consecutive call-expressions ... pack without blank
    /// lines").
    pub fn is_call(&self) -> bool {
        matches!(self, Expression::CallExpression { .. })
    }

    pub fn is_template(&self) -> bool {
        matches!(self, Expression::TemplateExpression { .. })
    }

    pub fn is_literal_code(&self) -> bool {
        matches!(self, Expression::LiteralCodeExpression(_))
    }
}
