//! Expression rendering (spec §4.4): literals, collection literals,
//! tuples/tuple-shuffles, declaration references, dot-expression enum
//! dispatch, operators, calls, closures, string interpolation, and
//! template substitution.

use swiftling_ir::{Expression, FunctionParameter, LabeledExpression, Statement, TupleShuffleIndex};

use crate::context::EmitContext;
use crate::registry::EnumKind;
use crate::statement::render_block;
use crate::type_map::map_type;
use crate::util::{capitalize, fits_line_budget};

pub fn emit_expression(expr: &Expression, indent: &str, ctx: &mut EmitContext) -> String {
    match expr {
        Expression::LiteralInt(v) => v.to_string(),
        Expression::LiteralUInt(v) => format!("{v}u"),
        Expression::LiteralDouble(v) => render_double(*v),
        Expression::LiteralFloat(v) => format!("{}f", render_double(*v as f64)),
        Expression::LiteralBool(v) => v.to_string(),
        Expression::LiteralString(s) => format!("\"{s}\""),
        Expression::LiteralCharacter(c) => format!("'{}'", escape_char(*c)),
        Expression::LiteralNil => "null".to_string(),

        Expression::InterpolatedStringLiteral(parts) => render_interpolated(parts, indent, ctx),

        Expression::ArrayExpression { elements, .. } => {
            let items: Vec<String> = elements.iter().map(|e| emit_expression(e, indent, ctx)).collect();
            format!("mutableListOf({})", items.join(", "))
        }
        Expression::DictionaryExpression { keys, values, .. } => {
            let items: Vec<String> = keys
                .iter()
                .zip(values.iter())
                .map(|(k, v)| format!("{} to {}", emit_expression(k, indent, ctx), emit_expression(v, indent, ctx)))
                .collect();
            format!("mutableMapOf({})", items.join(", "))
        }
        Expression::TupleExpression(pairs) => {
            let items: Vec<String> = pairs.iter().map(|p| render_labeled(p, indent, ctx)).collect();
            format!("({})", items.join(", "))
        }
        Expression::TupleShuffleExpression { .. } => {
            format!("({})", render_tuple_shuffle_arguments(expr, indent, ctx).join(", "))
        }

        Expression::DeclarationReferenceExpression { identifier, .. } => identifier.clone(),
        Expression::TypeExpression { type_name } => map_type(type_name),

        Expression::DotExpression { lhs, rhs } => render_dot_chain(lhs, rhs, indent, ctx, false),

        Expression::SubscriptExpression { subscripted, index, .. } => {
            format!("{}[{}]", emit_expression(subscripted, indent, ctx), emit_expression(index, indent, ctx))
        }
        Expression::BinaryOperatorExpression { lhs, rhs, operator, .. } => format!(
            "{} {} {}",
            emit_expression(lhs, indent, ctx),
            map_binary_operator(operator),
            emit_expression(rhs, indent, ctx)
        ),
        Expression::PrefixUnaryExpression { expr, operator, .. } => {
            format!("{}{}", operator, emit_expression(expr, indent, ctx))
        }
        Expression::PostfixUnaryExpression { expr, operator, .. } => {
            format!("{}{}", emit_expression(expr, indent, ctx), operator)
        }

        Expression::CallExpression { function, parameters, type_name } => {
            crate::call::emit_call(function, parameters, type_name, indent, ctx)
        }
        Expression::ClosureExpression { parameters, statements, .. } => {
            render_closure(parameters, statements, indent, ctx)
        }
        Expression::ParenthesesExpression(inner) => format!("({})", emit_expression(inner, indent, ctx)),
        Expression::ForceValueExpression(inner) => format!("{}!!", emit_expression(inner, indent, ctx)),
        Expression::OptionalExpression(inner) => format!("{}?", emit_expression(inner, indent, ctx)),

        Expression::TemplateExpression { pattern, matches } => {
            let mut rendered = pattern.clone();
            for (placeholder, sub_expr) in matches {
                rendered = rendered.replace(placeholder, &emit_expression(sub_expr, indent, ctx));
            }
            rendered
        }
        Expression::LiteralCodeExpression(text) | Expression::LiteralDeclarationExpression(text) => {
            unwrap_escapes(text)
        }

        Expression::Error => "<<Error>>".to_string(),
    }
}

fn render_double(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') || s.contains('e') || s.contains('E') || s.contains("NaN") || s.contains("inf") {
        s
    } else {
        format!("{s}.0")
    }
}

fn escape_char(c: char) -> String {
    match c {
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}

/// Unwrap a literal-code directive's escapes (spec §4.4): `\n` -> newline,
/// `\t` -> tab, `\\` -> `\`; any other escape drops its leading backslash.
fn unwrap_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn render_labeled(pair: &LabeledExpression, indent: &str, ctx: &mut EmitContext) -> String {
    let value = emit_expression(&pair.expression, indent, ctx);
    match &pair.label {
        Some(label) if !label.is_empty() => format!("{label} = {value}"),
        _ => value,
    }
}

/// Positional arguments of a `Tuple Shuffle Expression` (spec §4.2.4,
/// §4.4): a variadic index consumes `count` expressions and, once
/// reached, suppresses argument labels for every argument from then on
/// (Kotlin disallows named arguments before a vararg).
pub(crate) fn render_tuple_shuffle_arguments(expr: &Expression, indent: &str, ctx: &mut EmitContext) -> Vec<String> {
    let Expression::TupleShuffleExpression { labels, indices, expressions } = expr else {
        return vec![emit_expression(expr, indent, ctx)];
    };
    let mut out = Vec::new();
    let mut iter = expressions.iter();
    let mut past_variadic = false;
    for (i, index) in indices.iter().enumerate() {
        match index {
            TupleShuffleIndex::Absent => {}
            TupleShuffleIndex::Present => {
                if let Some(e) = iter.next() {
                    let value = emit_expression(e, indent, ctx);
                    let label = labels.get(i).map(String::as_str).unwrap_or_default();
                    out.push(if !past_variadic && !label.is_empty() {
                        format!("{label} = {value}")
                    } else {
                        value
                    });
                }
            }
            TupleShuffleIndex::Variadic { count } => {
                past_variadic = true;
                for _ in 0..*count {
                    if let Some(e) = iter.next() {
                        out.push(emit_expression(e, indent, ctx));
                    }
                }
            }
        }
    }
    out
}

/// The name to look an enum dispatch rule up by: a bare type reference or
/// a declaration reference naming a type.
fn type_like_name(e: &Expression) -> Option<&str> {
    match e {
        Expression::TypeExpression { type_name } => Some(type_name.as_str()),
        Expression::DeclarationReferenceExpression { identifier, .. } => Some(identifier.as_str()),
        _ => None,
    }
}

fn decl_name(e: &Expression) -> Option<&str> {
    match e {
        Expression::DeclarationReferenceExpression { identifier, .. } => Some(identifier.as_str()),
        _ => None,
    }
}

/// Render a `lhs.rhs` dot-expression, consulting the enum registry (spec
/// §4.4, testable property 6). `in_call_position` suppresses the
/// trailing `()` a bare sealed-case reference otherwise gets, since the
/// caller (a `CallExpression`) supplies its own argument list instead.
pub(crate) fn render_dot_chain(
    lhs: &Expression,
    rhs: &Expression,
    indent: &str,
    ctx: &mut EmitContext,
    in_call_position: bool,
) -> String {
    if let (Some(enum_name), Some(case_name)) = (type_like_name(lhs), decl_name(rhs)) {
        match ctx.enums.kind_of(enum_name) {
            Some(EnumKind::Sealed) => {
                let case = format!("{enum_name}.{}", capitalize(case_name));
                return if in_call_position { case } else { format!("{case}()") };
            }
            Some(EnumKind::EnumClass) => return capitalize(case_name),
            None => {}
        }
    }
    format!("{}.{}", emit_expression(lhs, indent, ctx), emit_expression(rhs, indent, ctx))
}

/// Swift operators that don't spell the same in Kotlin.
fn map_binary_operator(op: &str) -> &str {
    match op {
        "??" => "?:",
        "===" => "===",
        "!==" => "!==",
        other => other,
    }
}

fn render_interpolated(parts: &[Expression], indent: &str, ctx: &mut EmitContext) -> String {
    let mut out = String::from("\"");
    for part in parts {
        match part {
            Expression::LiteralString(s) if s.is_empty() => {}
            Expression::LiteralString(s) => out.push_str(s),
            other => {
                out.push_str("${");
                out.push_str(&emit_expression(other, indent, ctx));
                out.push('}');
            }
        }
    }
    out.push('"');
    out
}

fn render_closure(
    parameters: &[FunctionParameter],
    statements: &[Statement],
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    let header = if parameters.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = parameters.iter().map(|p| p.label.as_str()).collect();
        format!("{} -> ", names.join(", "))
    };
    if statements.len() <= 1 {
        let body = statements
            .first()
            .map(|s| crate::statement::emit_statement(s, indent, ctx))
            .unwrap_or_default();
        let flat = format!("{{ {header}{body} }}");
        if fits_line_budget(indent, &flat) {
            return flat;
        }
    }
    let block = render_block(statements, indent, ctx);
    if header.is_empty() {
        block
    } else {
        format!("{{ {header}\n{}", block.trim_start_matches('{'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftling_diag::DiagnosticSink;

    fn ctx(sink: &mut DiagnosticSink) -> EmitContext<'_> {
        EmitContext::new(sink)
    }

    #[test]
    fn array_expression_renders_mutable_list_of() {
        let mut sink = DiagnosticSink::default();
        let mut ectx = ctx(&mut sink);
        let e = Expression::ArrayExpression {
            elements: vec![Expression::LiteralInt(1), Expression::LiteralInt(2), Expression::LiteralInt(3)],
            type_name: "[Int]".into(),
        };
        assert_eq!(emit_expression(&e, "", &mut ectx), "mutableListOf(1, 2, 3)");
    }

    #[test]
    fn interpolated_string_skips_empty_sentinel_segments() {
        let mut sink = DiagnosticSink::default();
        let mut ectx = ctx(&mut sink);
        let e = Expression::InterpolatedStringLiteral(vec![
            Expression::LiteralString("hi ".into()),
            Expression::DeclarationReferenceExpression {
                identifier: "name".into(),
                type_name: "String".into(),
                is_standard_library: false,
                is_implicit: false,
            },
            Expression::LiteralString("".into()),
        ]);
        assert_eq!(emit_expression(&e, "", &mut ectx), "\"hi ${name}\"");
    }

    #[test]
    fn sealed_enum_dot_expression_renders_constructor_call() {
        let mut sink = DiagnosticSink::default();
        let mut ectx = ctx(&mut sink);
        ectx.enums.register("Shape", EnumKind::Sealed);
        let e = Expression::DotExpression {
            lhs: Box::new(Expression::TypeExpression { type_name: "Shape".into() }),
            rhs: Box::new(Expression::DeclarationReferenceExpression {
                identifier: "circle".into(),
                type_name: "Shape".into(),
                is_standard_library: false,
                is_implicit: false,
            }),
        };
        assert_eq!(emit_expression(&e, "", &mut ectx), "Shape.Circle()");
    }

    #[test]
    fn double_literal_keeps_a_decimal_point() {
        assert_eq!(render_double(3.0), "3.0");
        assert_eq!(render_double(1.5), "1.5");
    }
}
