//! Call-expression rendering (spec §4.4): unfolds the `function` operand's
//! dot-chain into a receiver-qualified callee, consults the function
//! translation registry for a bespoke rewrite, renders the argument list
//! from either a `TupleExpression` or a `TupleShuffleExpression`, and
//! reflows to one argument per line past the 100-column budget.

use swiftling_ir::Expression;

use crate::context::EmitContext;
use crate::expression::{emit_expression, render_dot_chain, render_tuple_shuffle_arguments};
use crate::util::fits_line_budget;

pub fn emit_call(
    function: &Expression,
    parameters: &Expression,
    type_name: &str,
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    let (default_callee, bare_identifier) = unfold_callee(function, indent, ctx);
    let translation = ctx.functions.lookup(&bare_identifier, type_name).cloned();
    let callee = translation
        .as_ref()
        .and_then(|t| t.prefix.clone())
        .unwrap_or(default_callee);

    let overrides = translation.as_ref().and_then(|t| t.parameter_labels.as_ref());
    let args = render_arguments(parameters, overrides, indent, ctx);

    let flat = format!("{callee}({})", args.join(", "));
    if fits_line_budget(indent, &flat) {
        return flat;
    }

    let inner = format!("{indent}\t");
    let mut out = format!("{callee}(\n");
    for (i, arg) in args.iter().enumerate() {
        out.push_str(&inner);
        out.push_str(arg);
        if i + 1 < args.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(indent);
    out.push(')');
    out
}

/// Returns the rendered callee text (without the trailing `()`) and the
/// bare identifier used to key the function translation registry.
fn unfold_callee(function: &Expression, indent: &str, ctx: &mut EmitContext) -> (String, String) {
    match function {
        Expression::DotExpression { lhs, rhs } => {
            let bare = match rhs.as_ref() {
                Expression::DeclarationReferenceExpression { identifier, .. } => identifier.clone(),
                other => emit_expression(other, indent, ctx),
            };
            (render_dot_chain(lhs, rhs, indent, ctx, true), bare)
        }
        Expression::DeclarationReferenceExpression { identifier, .. } => (identifier.clone(), identifier.clone()),
        other => {
            let text = emit_expression(other, indent, ctx);
            (text.clone(), text)
        }
    }
}

fn render_arguments(
    parameters: &Expression,
    overrides: Option<&Vec<Option<String>>>,
    indent: &str,
    ctx: &mut EmitContext,
) -> Vec<String> {
    match parameters {
        Expression::TupleExpression(pairs) => pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                let value = emit_expression(&pair.expression, indent, ctx);
                let label = overrides
                    .and_then(|o| o.get(i).cloned())
                    .unwrap_or_else(|| pair.label.clone());
                match label {
                    Some(l) if !l.is_empty() => format!("{l} = {value}"),
                    _ => value,
                }
            })
            .collect(),
        Expression::TupleShuffleExpression { .. } => {
            let rendered = render_tuple_shuffle_arguments(parameters, indent, ctx);
            match overrides {
                None => rendered,
                Some(labels) => rendered
                    .into_iter()
                    .enumerate()
                    .map(|(i, value)| match labels.get(i) {
                        Some(Some(l)) => format!("{l} = {}", strip_existing_label(&value)),
                        Some(None) => strip_existing_label(&value).to_string(),
                        None => value,
                    })
                    .collect(),
            }
        }
        other => vec![emit_expression(other, indent, ctx)],
    }
}

fn strip_existing_label(rendered: &str) -> &str {
    match rendered.split_once(" = ") {
        Some((_, value)) => value,
        None => rendered,
    }
}
