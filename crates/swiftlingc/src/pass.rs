//! IR-to-IR passes (spec §4.6). `irAfterPasses` is specified as running
//! external passes in a fixed two-round order: every registered pass
//! runs once over the whole unit, then the same sequence runs again so a
//! pass that depends on another pass's first-round output still sees
//! the fixed point of a single extra round, without requiring passes to
//! fully commute.

use swiftling_ir::{Expression, Statement, TranslationUnit};

pub trait Pass {
    fn name(&self) -> &str;
    fn run(&self, unit: &mut TranslationUnit);
}

/// Runs its registered passes, in order, twice over the unit.
#[derive(Default)]
pub struct PassPipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl PassPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, pass: impl Pass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn run_twice(&self, unit: &mut TranslationUnit) {
        for _ in 0..2 {
            for pass in &self.passes {
                pass.run(unit);
            }
        }
    }
}

/// Merges consecutive `LiteralString` segments of an `InterpolatedStringLiteral`
/// into one, e.g. a decoder that splits `"a" + "b"` worth of literal text
/// across two segments either side of an interpolation that later
/// collapsed to nothing. Leaves the empty-segment sentinel (spec §4.4)
/// alone when it's the only segment between two non-literal parts.
pub struct MergeAdjacentStringLiterals;

impl Pass for MergeAdjacentStringLiterals {
    fn name(&self) -> &str {
        "MergeAdjacentStringLiterals"
    }

    fn run(&self, unit: &mut TranslationUnit) {
        for stmt in &mut unit.statements {
            walk_statement(stmt);
        }
    }
}

fn walk_statement(stmt: &mut Statement) {
    match stmt {
        Statement::ClassDeclaration { members, .. }
        | Statement::StructDeclaration { members, .. }
        | Statement::CompanionObject { members }
        | Statement::EnumDeclaration { members, .. }
        | Statement::ProtocolDeclaration { members, .. }
        | Statement::ExtensionDeclaration { members, .. }
        | Statement::ForEachStatement { body: members, .. }
        | Statement::WhileStatement { body: members, .. }
        | Statement::DeferStatement { body: members } => {
            for m in members {
                walk_statement(m);
            }
        }
        Statement::FunctionDeclaration(f) => {
            if let Some(body) = &mut f.statements {
                for s in body {
                    walk_statement(s);
                }
            }
        }
        Statement::VariableDeclaration(v) => {
            if let Some(e) = &mut v.expression {
                walk_expression(e);
            }
        }
        Statement::IfStatement(if_stmt) => {
            for s in &mut if_stmt.statements {
                walk_statement(s);
            }
            if let Some(e) = &mut if_stmt.else_statement {
                walk_statement(e);
            }
        }
        Statement::SwitchStatement { expr, cases, .. } => {
            walk_expression(expr);
            for case in cases {
                for s in &mut case.statements {
                    walk_statement(s);
                }
            }
        }
        Statement::ThrowStatement { expr } => walk_expression(expr),
        Statement::ReturnStatement { expr: Some(e) } => walk_expression(e),
        Statement::AssignmentStatement { lhs, rhs } => {
            walk_expression(lhs);
            walk_expression(rhs);
        }
        Statement::Expression(e) => walk_expression(e),
        _ => {}
    }
}

fn walk_expression(expr: &mut Expression) {
    match expr {
        Expression::InterpolatedStringLiteral(parts) => {
            for p in parts.iter_mut() {
                walk_expression(p);
            }
            merge_literal_runs(parts);
        }
        Expression::ArrayExpression { elements, .. } => {
            for e in elements {
                walk_expression(e);
            }
        }
        Expression::DictionaryExpression { keys, values, .. } => {
            for e in keys.iter_mut().chain(values.iter_mut()) {
                walk_expression(e);
            }
        }
        Expression::TupleExpression(pairs) => {
            for p in pairs {
                walk_expression(&mut p.expression);
            }
        }
        Expression::TupleShuffleExpression { expressions, .. } => {
            for e in expressions {
                walk_expression(e);
            }
        }
        Expression::DotExpression { lhs, rhs } => {
            walk_expression(lhs);
            walk_expression(rhs);
        }
        Expression::SubscriptExpression { subscripted, index, .. } => {
            walk_expression(subscripted);
            walk_expression(index);
        }
        Expression::BinaryOperatorExpression { lhs, rhs, .. } => {
            walk_expression(lhs);
            walk_expression(rhs);
        }
        Expression::PrefixUnaryExpression { expr, .. }
        | Expression::PostfixUnaryExpression { expr, .. }
        | Expression::ParenthesesExpression(expr)
        | Expression::ForceValueExpression(expr)
        | Expression::OptionalExpression(expr) => walk_expression(expr),
        Expression::CallExpression { function, parameters, .. } => {
            walk_expression(function);
            walk_expression(parameters);
        }
        Expression::ClosureExpression { statements, .. } => {
            for s in statements {
                walk_statement(s);
            }
        }
        Expression::TemplateExpression { matches, .. } => {
            for (_, e) in matches {
                walk_expression(e);
            }
        }
        _ => {}
    }
}

fn merge_literal_runs(parts: &mut Vec<Expression>) {
    let mut merged: Vec<Expression> = Vec::with_capacity(parts.len());
    for part in parts.drain(..) {
        match (merged.last_mut(), &part) {
            (Some(Expression::LiteralString(prev)), Expression::LiteralString(s)) if !s.is_empty() => {
                prev.push_str(s);
            }
            _ => merged.push(part),
        }
    }
    *parts = merged;
}
