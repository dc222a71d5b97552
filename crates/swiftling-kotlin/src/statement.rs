//! Statement and declaration sequencing (spec §4.4): the blank-line
//! packing rule, block rendering, control-flow statements, and the
//! `switch`-as-`when` / `convertsToExpression` rewrite.

use swiftling_ir::{ConvertsToExpression, Expression, IfCondition, Statement, SwitchCase, VariableDecl};

use crate::context::EmitContext;
use crate::declaration::{render_class_like, render_enum, render_function, render_variable};
use crate::expression::emit_expression;
use crate::util::is_range_pattern;

/// Renders a sequence of statements/declarations, one per line, inserting
/// a blank line between consecutive entries unless the sequence has three
/// or fewer statements, or the pair packs together (spec §4.4).
pub fn emit_statement_sequence(stmts: &[Statement], indent: &str, ctx: &mut EmitContext) -> String {
    let merged = merge_converted_switches(stmts, indent, ctx);
    let mut lines: Vec<String> = Vec::new();
    for (i, (rendered, packs_with_prev)) in merged.iter().enumerate() {
        if i > 0 && merged.len() > 3 && !packs_with_prev {
            lines.push(String::new());
        }
        lines.push(format!("{indent}{rendered}"));
    }
    lines.join("\n")
}

/// Walks `stmts` looking for a `VariableDeclaration` with no initializer
/// immediately followed by a `SwitchStatement` whose
/// `converts_to_expression` names that same variable -- the pair merges
/// into one `val x: T = when (...) { ... }` line (spec §4.4).
fn merge_converted_switches(stmts: &[Statement], indent: &str, ctx: &mut EmitContext) -> Vec<(String, bool)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < stmts.len() {
        if let (Statement::VariableDeclaration(decl), Some(Statement::SwitchStatement { converts_to_expression: Some(ConvertsToExpression::VariableDeclaration(id)), expr, cases })) =
            (&stmts[i], stmts.get(i + 1))
        {
            if decl.expression.is_none() && &decl.identifier == id {
                let when_text = render_when(expr, cases, Some(&ConvertsToExpression::VariableDeclaration(id.clone())), indent, ctx);
                let rendered = format!(
                    "{} {}: {} = {when_text}",
                    if decl.is_let { "val" } else { "var" },
                    decl.identifier,
                    crate::type_map::map_type(&decl.type_name)
                );
                let packs = i > 0 && stmts[i - 1].packs_without_blank_line_with(&stmts[i]);
                out.push((rendered, packs));
                i += 2;
                continue;
            }
        }
        let rendered = emit_statement(&stmts[i], indent, ctx);
        let packs = i > 0 && stmts[i - 1].packs_without_blank_line_with(&stmts[i]);
        out.push((rendered, packs));
        i += 1;
    }
    out
}

/// Renders a `{ ... }` block at `indent`, with its statements one level
/// deeper.
pub fn render_block(stmts: &[Statement], indent: &str, ctx: &mut EmitContext) -> String {
    let inner = format!("{indent}\t");
    let body = emit_statement_sequence(stmts, &inner, ctx);
    if body.is_empty() {
        format!("{{\n{indent}}}")
    } else {
        format!("{{\n{body}\n{indent}}}")
    }
}

pub fn emit_statement(stmt: &Statement, indent: &str, ctx: &mut EmitContext) -> String {
    match stmt {
        Statement::ImportDeclaration { name } => format!("import {name}"),
        Statement::TypealiasDeclaration { identifier, type_name, .. } => {
            format!("typealias {identifier} = {}", crate::type_map::map_type(type_name))
        }
        Statement::ClassDeclaration { name, inherits, members } => {
            render_class_like("class", None, name, inherits, members, indent, ctx)
        }
        Statement::StructDeclaration { name, inherits, members } => {
            crate::declaration::render_struct(name, inherits, members, indent, ctx)
        }
        Statement::CompanionObject { members } => {
            format!("companion object {}", render_block(members, indent, ctx))
        }
        Statement::EnumDeclaration { access, name, inherits, elements, members, .. } => {
            render_enum(access.as_deref(), name, inherits, elements, members, indent, ctx)
        }
        Statement::ProtocolDeclaration { name, members } => {
            format!("interface {name} {}", render_block(members, indent, ctx))
        }
        Statement::ExtensionDeclaration { members, .. } => {
            // Kotlin has no extension-scope block; each member already
            // carries `extends_type` and renders its own receiver prefix.
            emit_statement_sequence(members, indent, ctx)
        }
        Statement::FunctionDeclaration(f) => render_function(f, indent, ctx),
        Statement::VariableDeclaration(v) => render_variable(v, indent, ctx),
        Statement::ForEachStatement { collection, variable, body } => {
            format!(
                "for ({variable} in {}) {}",
                emit_expression(collection, indent, ctx),
                render_block(body, indent, ctx)
            )
        }
        Statement::WhileStatement { expr, body } => {
            format!("while ({}) {}", emit_expression(expr, indent, ctx), render_block(body, indent, ctx))
        }
        Statement::IfStatement(if_stmt) => render_if(if_stmt, indent, ctx),
        Statement::SwitchStatement { converts_to_expression, expr, cases } => {
            render_when(expr, cases, converts_to_expression.as_ref(), indent, ctx)
        }
        Statement::DeferStatement { body } => {
            format!("defer {}", render_block(body, indent, ctx))
        }
        Statement::ThrowStatement { expr } => format!("throw {}", emit_expression(expr, indent, ctx)),
        Statement::ReturnStatement { expr } => match expr {
            Some(e) => format!("return {}", emit_expression(e, indent, ctx)),
            None => "return".to_string(),
        },
        Statement::BreakStatement => "break".to_string(),
        Statement::ContinueStatement => "continue".to_string(),
        Statement::AssignmentStatement { lhs, rhs } => {
            format!("{} = {}", emit_expression(lhs, indent, ctx), emit_expression(rhs, indent, ctx))
        }
        Statement::Expression(e) => emit_expression(e, indent, ctx),
        Statement::Error => "<<Error>>".to_string(),
    }
}

fn render_if(if_stmt: &swiftling_ir::IfStmt, indent: &str, ctx: &mut EmitContext) -> String {
    let conditions: Vec<String> = if_stmt
        .conditions
        .iter()
        .map(|c| match c {
            IfCondition::Expr(e) => emit_expression(e, indent, ctx),
            IfCondition::Let(decl) => render_let_condition(decl, indent, ctx),
        })
        .collect();
    let joined = conditions.join(" && ");
    let joined = if if_stmt.is_guard { format!("!({joined})") } else { joined };
    let head = format!("if ({joined}) {}", render_block(&if_stmt.statements, indent, ctx));
    match &if_stmt.else_statement {
        None => head,
        Some(else_stmt) => match else_stmt.as_ref() {
            Statement::IfStatement(nested) => format!("{head} else {}", render_if(nested, indent, ctx)),
            other => format!("{head} else {}", render_block(std::slice::from_ref(other), indent, ctx)),
        },
    }
}

fn render_let_condition(decl: &VariableDecl, indent: &str, ctx: &mut EmitContext) -> String {
    match &decl.expression {
        Some(e) => format!("{} != null", emit_expression(e, indent, ctx)),
        None => format!("{} != null", decl.identifier),
    }
}

fn render_when(
    expr: &Expression,
    cases: &[SwitchCase],
    converts: Option<&ConvertsToExpression>,
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    let scrutinee = emit_expression(expr, indent, ctx);
    let inner = format!("{indent}\t");
    let mut arms = String::new();
    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            arms.push('\n');
        }
        let pattern = match &case.expression {
            None => "else".to_string(),
            Some(e) => {
                let rendered = emit_expression(e, indent, ctx);
                if is_range_pattern(&rendered) {
                    format!("in {rendered}")
                } else {
                    rendered
                }
            }
        };
        let body = render_case_body(&case.statements, converts, &inner, ctx);
        arms.push_str(&format!("{inner}{pattern} -> {body}"));
    }
    let when_text = format!("when ({scrutinee}) {{\n{arms}\n{indent}}}");
    match converts {
        Some(ConvertsToExpression::Return) => format!("return {when_text}"),
        Some(ConvertsToExpression::Assignment(target)) => {
            format!("{} = {when_text}", emit_expression(target, indent, ctx))
        }
        _ => when_text,
    }
}

/// Renders one `when` arm's body. When the switch converts into an
/// expression position, a single trailing statement matching the
/// conversion's shape (a `return`, an assignment to the converted target,
/// or an assignment to the declared variable) renders as just its value;
/// anything else falls back to the statement's own rendering.
fn render_case_body(
    stmts: &[Statement],
    converts: Option<&ConvertsToExpression>,
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    if let (Some(converts), [only]) = (converts, stmts) {
        if let Some(value) = case_value_expr(only, converts) {
            return emit_expression(value, indent, ctx);
        }
    }
    if stmts.len() == 1 {
        emit_statement(&stmts[0], indent, ctx)
    } else {
        render_block(stmts, indent, ctx)
    }
}

fn case_value_expr<'a>(stmt: &'a Statement, converts: &ConvertsToExpression) -> Option<&'a Expression> {
    match (stmt, converts) {
        (Statement::ReturnStatement { expr: Some(e) }, ConvertsToExpression::Return) => Some(e),
        (Statement::AssignmentStatement { rhs, .. }, ConvertsToExpression::Assignment(_)) => Some(rhs),
        (Statement::AssignmentStatement { rhs, .. }, ConvertsToExpression::VariableDeclaration(_)) => Some(rhs),
        _ => None,
    }
}
