//! Expression dispatch (spec §4.2): the RawTree `name` selects the
//! translator function. Every function asserts its input's shape and
//! either returns an IR `Expression` or reports a diagnostic and returns
//! `Expression::Error`.

use swiftling_decoder::RawTree;
use swiftling_diag::FailFast;
use swiftling_ir::{Expression, FunctionParameter, LabeledExpression, TupleShuffleIndex};

use crate::context::TranslationContext;
use crate::type_clean::clean_up_type;

/// Look up a required child by index, reporting an error through `ctx`
/// when it's missing. Returns `Ok(None)` in collect mode so the caller
/// falls back to `Expression::Error`; propagates `FailFast` only when the
/// sink is actually configured to stop at the first error.
fn expect_child<'a>(
    tree: &'a RawTree,
    ctx: &mut TranslationContext,
    context: &'static str,
    index: usize,
) -> Result<Option<&'a RawTree>, FailFast> {
    match tree.child(index) {
        Some(c) => Ok(Some(c)),
        None => {
            ctx.report_unexpected_structure(
                tree,
                context,
                format!("expected a child at index {index}"),
            )?;
            Ok(None)
        }
    }
}

/// `expect_child` wrapped for the common case where a missing child
/// should make the enclosing expression translate to `Expression::Error`.
macro_rules! child_or_error {
    ($tree:expr, $ctx:expr, $context:literal, $index:expr) => {
        match expect_child($tree, $ctx, $context, $index)? {
            Some(c) => c,
            None => return Ok(Expression::Error),
        }
    };
}

/// Node names that pass their translation straight through to a single
/// child, with no IR node of their own (spec §4.2).
fn pass_through_child(tree: &RawTree) -> Option<&RawTree> {
    match tree.name.as_str() {
        "Erasure Expression"
        | "Autoclosure Expression"
        | "Inject Into Optional Expression"
        | "Optional Evaluation Expression"
        | "Inout Expression"
        | "Load Expression"
        | "Function Conversion Expression"
        | "Try Expression" => tree.children.last(),
        "Collection Upcast Expression" => tree.children.first(),
        _ => None,
    }
}

pub fn translate_expression(
    tree: &RawTree,
    ctx: &mut TranslationContext,
) -> Result<Expression, FailFast> {
    if let Some(overridden) = crate::comments::value_override(tree, ctx.source_file) {
        return Ok(overridden);
    }

    if let Some(child) = pass_through_child(tree) {
        return translate_expression(child, ctx);
    }

    match tree.name.as_str() {
        "Parentheses Expression" => translate_parentheses(tree, ctx),
        "Open Existential Expression" => translate_open_existential(tree, ctx),

        "Integer Literal Expression" => Ok(literal_int_from(tree)),
        "Float Literal Expression" => Ok(literal_double_from(tree)),
        "Boolean Literal Expression" => Ok(Expression::LiteralBool(tree.attribute("value") == Some("true"))),
        "String Literal Expression" => Ok(Expression::LiteralString(
            tree.attribute("value").unwrap_or_default().to_string(),
        )),
        "Character Literal Expression" => Ok(Expression::LiteralCharacter(
            tree.attribute("value").and_then(|s| s.chars().next()).unwrap_or('\0'),
        )),
        "Nil Literal Expression" => Ok(Expression::LiteralNil),
        "Interpolated String Literal Expression" => translate_interpolated_string(tree, ctx),

        "Array Expression" => translate_array(tree, ctx),
        "Dictionary Expression" => translate_dictionary(tree, ctx),
        "Tuple Expression" => translate_tuple(tree, ctx),
        "Tuple Shuffle Expression" => translate_tuple_shuffle(tree, ctx),

        "Declaration Reference Expression" => Ok(translate_declref(tree)),
        "Type Expression" => Ok(Expression::TypeExpression {
            type_name: clean_up_type(tree.attribute("typerepr").unwrap_or_default()),
        }),

        "Dot Syntax Call Expression" => translate_dot_syntax_call(tree, ctx),
        "Member Reference Expression" => translate_member_reference(tree, ctx),
        "Subscript Expression" => translate_subscript(tree, ctx),
        "Binary Expression" => translate_binary(tree, ctx),
        "Prefix Unary Expression" => translate_prefix_unary(tree, ctx),
        "Postfix Unary Expression" => translate_postfix_unary(tree, ctx),
        "Call Expression" => translate_call(tree, ctx),
        "Closure Expression" => translate_closure(tree, ctx),
        "Force Value Expression" => {
            let inner = child_or_error!(tree, ctx, "translate_expression", 0);
            Ok(Expression::ForceValueExpression(Box::new(translate_expression(inner, ctx)?)))
        }
        "Bind Optional Expression" | "Optional Chaining Expression" => {
            let inner = child_or_error!(tree, ctx, "translate_expression", 0);
            Ok(Expression::OptionalExpression(Box::new(translate_expression(inner, ctx)?)))
        }

        _ => {
            ctx.report_unexpected_structure(
                tree,
                "translate_expression",
                format!("no translation rule for node `{}`", tree.name),
            )?;
            Ok(Expression::Error)
        }
    }
}

fn literal_int_from(tree: &RawTree) -> Expression {
    let raw = tree.attribute("value").unwrap_or("0");
    let negative = tree.standalone_attributes.iter().any(|a| a == "negative");
    let text = if negative { format!("-{raw}") } else { raw.to_string() };
    match text.parse::<i64>() {
        Ok(v) => Expression::LiteralInt(v),
        Err(_) => text.parse::<u64>().map(Expression::LiteralUInt).unwrap_or(Expression::Error),
    }
}

fn literal_double_from(tree: &RawTree) -> Expression {
    let raw = tree.attribute("value").unwrap_or("0");
    let negative = tree.standalone_attributes.iter().any(|a| a == "negative");
    let text = if negative { format!("-{raw}") } else { raw.to_string() };
    text.parse::<f64>().map(Expression::LiteralDouble).unwrap_or(Expression::Error)
}

fn translate_parentheses(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let inner = child_or_error!(tree, ctx, "translate_parentheses", 0);
    let implicit = tree.standalone_attributes.iter().any(|a| a == "implicit");
    let translated = translate_expression(inner, ctx)?;
    if implicit {
        Ok(translated)
    } else {
        Ok(Expression::ParenthesesExpression(Box::new(translated)))
    }
}

/// Replace every `Opaque Value Expression` inside `node` with
/// `replacement`, recursively (spec §4.2).
fn substitute_opaque_value(node: &RawTree, replacement: &RawTree) -> RawTree {
    if node.name == "Opaque Value Expression" {
        return replacement.clone();
    }
    RawTree {
        name: node.name.clone(),
        standalone_attributes: node.standalone_attributes.clone(),
        key_value_attributes: node.key_value_attributes.clone(),
        children: node
            .children
            .iter()
            .map(|c| substitute_opaque_value(c, replacement))
            .collect(),
    }
}

fn translate_open_existential(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let replacement = child_or_error!(tree, ctx, "translate_open_existential", 1).clone();
    let body = child_or_error!(tree, ctx, "translate_open_existential", 0);
    let substituted = substitute_opaque_value(body, &replacement);
    translate_expression(&substituted, ctx)
}

fn translate_interpolated_string(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let mut parts = Vec::with_capacity(tree.children.len());
    for child in &tree.children {
        parts.push(translate_expression(child, ctx)?);
    }
    Ok(Expression::InterpolatedStringLiteral(parts))
}

fn translate_array(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let type_name = clean_up_type(tree.attribute("type").unwrap_or_default());
    let mut elements = Vec::new();
    for child in &tree.children {
        elements.push(translate_expression(child, ctx)?);
    }
    Ok(Expression::ArrayExpression { elements, type_name })
}

fn translate_dictionary(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let type_name = clean_up_type(tree.attribute("type").unwrap_or_default());
    let mut keys = Vec::new();
    let mut values = Vec::new();
    for pair in &tree.children {
        if pair.children.len() != 2 {
            ctx.report_unexpected_structure(
                tree,
                "translate_dictionary",
                "expected each element to be a (key, value) pair",
            )?;
            continue;
        }
        keys.push(translate_expression(&pair.children[0], ctx)?);
        values.push(translate_expression(&pair.children[1], ctx)?);
    }
    Ok(Expression::DictionaryExpression { keys, values, type_name })
}

fn translate_tuple(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let mut pairs = Vec::with_capacity(tree.children.len());
    for child in &tree.children {
        let label = child.attribute("label").map(|s| s.to_string());
        let expression = translate_expression(child, ctx)?;
        pairs.push(LabeledExpression { label, expression });
    }
    Ok(Expression::TupleExpression(pairs))
}

/// Parse the formal-argument labels out of a tuple type string, e.g.
/// `"(x: Int, Int, y: String)"` -> `["x", "", "y"]` (spec §4.2.4).
fn parse_tuple_labels(formal_type: &str) -> Vec<String> {
    let inner = formal_type
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(formal_type);
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split(", ")
        .map(|component| match component.split_once(':') {
            Some((label, _)) => label.trim().to_string(),
            None => String::new(),
        })
        .collect()
}

fn translate_tuple_shuffle(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let formal_type = tree.attribute("type").unwrap_or_default();
    let labels = parse_tuple_labels(formal_type);

    let variadic_count = tree
        .attribute("variadic_sources")
        .map(|s| s.split(',').filter(|p| !p.trim().is_empty()).count())
        .unwrap_or(0);

    let indices = tree
        .attribute("elements")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|raw| match raw.parse::<i64>() {
            Ok(-2) => TupleShuffleIndex::Variadic { count: variadic_count },
            Ok(n) if n >= 0 => TupleShuffleIndex::Present,
            _ => TupleShuffleIndex::Absent,
        })
        .collect();

    let mut expressions = Vec::new();
    if let Some(inner_tuple) = tree.subtree("Tuple Expression") {
        for child in &inner_tuple.children {
            expressions.push(translate_expression(child, ctx)?);
        }
    }

    Ok(Expression::TupleShuffleExpression { labels, indices, expressions })
}

/// Parse a `decl` reference token (`Swift.(file).Foo.bar@file:line:col`)
/// into `(identifier, is_standard_library)`.
fn parse_decl_reference(decl: &str) -> (String, bool) {
    let path = decl.split('@').next().unwrap_or(decl);
    let segments: Vec<&str> = path
        .split('.')
        .filter(|s| !s.starts_with('(') || !s.ends_with(')'))
        .collect();
    let identifier = segments.last().copied().unwrap_or_default().to_string();
    let is_standard_library = segments.first() == Some(&"Swift");
    (identifier, is_standard_library)
}

fn translate_declref(tree: &RawTree) -> Expression {
    let decl = tree.attribute("decl").unwrap_or_default();
    let (identifier, is_standard_library) = parse_decl_reference(decl);
    Expression::DeclarationReferenceExpression {
        identifier,
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
        is_standard_library,
        is_implicit: tree.standalone_attributes.iter().any(|a| a == "implicit"),
    }
}

fn translate_dot_syntax_call(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let function = child_or_error!(tree, ctx, "translate_dot_syntax_call", 0);
    let base = child_or_error!(tree, ctx, "translate_dot_syntax_call", 1);
    Ok(Expression::DotExpression {
        lhs: Box::new(translate_expression(base, ctx)?),
        rhs: Box::new(translate_expression(function, ctx)?),
    })
}

fn translate_member_reference(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let base = child_or_error!(tree, ctx, "translate_member_reference", 0);
    let decl = tree.attribute("decl").unwrap_or_default();
    let (identifier, is_standard_library) = parse_decl_reference(decl);
    let rhs = Expression::DeclarationReferenceExpression {
        identifier,
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
        is_standard_library,
        is_implicit: false,
    };
    Ok(Expression::DotExpression {
        lhs: Box::new(translate_expression(base, ctx)?),
        rhs: Box::new(rhs),
    })
}

fn translate_subscript(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let subscripted = child_or_error!(tree, ctx, "translate_subscript", 0);
    let index = child_or_error!(tree, ctx, "translate_subscript", 1);
    Ok(Expression::SubscriptExpression {
        subscripted: Box::new(translate_expression(subscripted, ctx)?),
        index: Box::new(translate_expression(index, ctx)?),
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
    })
}

fn translate_binary(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let lhs = child_or_error!(tree, ctx, "translate_binary", 0);
    let rhs = child_or_error!(tree, ctx, "translate_binary", 1);
    Ok(Expression::BinaryOperatorExpression {
        lhs: Box::new(translate_expression(lhs, ctx)?),
        rhs: Box::new(translate_expression(rhs, ctx)?),
        operator: tree.attribute("operator").unwrap_or_default().to_string(),
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
    })
}

fn translate_prefix_unary(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let operand = child_or_error!(tree, ctx, "translate_prefix_unary", 0);
    Ok(Expression::PrefixUnaryExpression {
        expr: Box::new(translate_expression(operand, ctx)?),
        operator: tree.attribute("operator").unwrap_or_default().to_string(),
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
    })
}

fn translate_postfix_unary(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let operand = child_or_error!(tree, ctx, "translate_postfix_unary", 0);
    Ok(Expression::PostfixUnaryExpression {
        expr: Box::new(translate_expression(operand, ctx)?),
        operator: tree.attribute("operator").unwrap_or_default().to_string(),
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
    })
}

/// Builtin-literal constructor labels recognized via a call's
/// `arg_labels` attribute (spec §4.2).
fn builtin_literal_kind(arg_labels: &str) -> Option<&'static str> {
    match arg_labels {
        "_builtinIntegerLiteral:" => Some("int"),
        "_builtinFloatLiteral:" => Some("float"),
        "_builtinBooleanLiteral:" => Some("bool"),
        "nilLiteral:" => Some("nil"),
        _ => None,
    }
}

fn find_typerepr(tree: &RawTree) -> Option<&str> {
    tree.subtree("Constructor Reference Call Expression")
        .and_then(|c| c.subtree("Type Expression"))
        .and_then(|t| t.attribute("typerepr"))
}

fn find_inner_literal<'a>(tree: &'a RawTree) -> Option<&'a RawTree> {
    for child in &tree.children {
        if child.name.ends_with("Literal Expression") {
            return Some(child);
        }
        if let Some(found) = find_inner_literal(child) {
            return Some(found);
        }
    }
    None
}

fn translate_builtin_literal_call(
    tree: &RawTree,
    kind: &str,
    ctx: &mut TranslationContext,
) -> Result<Expression, FailFast> {
    if kind == "bool" {
        let lit = find_inner_literal(tree);
        let value = lit.and_then(|l| l.attribute("value")) == Some("true");
        return Ok(Expression::LiteralBool(value));
    }
    if kind == "nil" {
        return Ok(Expression::LiteralNil);
    }

    let type_repr = find_typerepr(tree).unwrap_or("Int");
    let lit = match find_inner_literal(tree) {
        Some(l) => l,
        None => {
            ctx.report_unexpected_structure(
                tree,
                "translate_builtin_literal_call",
                "expected a nested literal expression",
            )?;
            return Ok(Expression::Error);
        }
    };
    let raw = lit.attribute("value").unwrap_or("0");
    let negative = lit.standalone_attributes.iter().any(|a| a == "negative");
    let text = if negative { format!("-{raw}") } else { raw.to_string() };

    if type_repr == "Double" || type_repr == "Float64" {
        return Ok(text.parse::<f64>().map(Expression::LiteralDouble).unwrap_or(Expression::Error));
    }
    if type_repr == "Float" || type_repr == "Float32" {
        return Ok(text.parse::<f32>().map(Expression::LiteralFloat).unwrap_or(Expression::Error));
    }
    if type_repr == "Float80" {
        ctx.report_unsupported(tree, "translate_builtin_literal_call", "Float80 literals are not supported")?;
        return Ok(Expression::Error);
    }
    if type_repr.starts_with('U') {
        return Ok(text.parse::<u64>().map(Expression::LiteralUInt).unwrap_or(Expression::Error));
    }
    Ok(text.parse::<i64>().map(Expression::LiteralInt).unwrap_or(Expression::Error))
}

fn translate_call(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    if let Some(kind) = tree.attribute("arg_labels").and_then(builtin_literal_kind) {
        return translate_builtin_literal_call(tree, kind, ctx);
    }

    let function = child_or_error!(tree, ctx, "translate_call", 0);
    let parameters = child_or_error!(tree, ctx, "translate_call", 1);
    Ok(Expression::CallExpression {
        function: Box::new(translate_expression(function, ctx)?),
        parameters: Box::new(translate_expression(parameters, ctx)?),
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
    })
}

/// Parse a `Parameter List`'s children into `FunctionParameter`s, shared
/// between function declarations and closures.
pub fn translate_parameter_list(
    tree: &RawTree,
    ctx: &mut TranslationContext,
) -> Result<Vec<FunctionParameter>, FailFast> {
    let mut params = Vec::with_capacity(tree.children.len());
    for child in &tree.children {
        let label = child.attribute("name").unwrap_or_default().to_string();
        let api_label = child
            .attribute("api_name")
            .filter(|n| **n != label)
            .map(|s| s.to_string());
        let type_name = clean_up_type(child.attribute("type").unwrap_or_default());
        let default_value = match child.subtree("Default Argument") {
            Some(default_tree) => Some(translate_expression(
                default_tree.children.first().unwrap_or(default_tree),
                ctx,
            )?),
            None => None,
        };
        params.push(FunctionParameter { label, api_label, type_name, default_value });
    }
    Ok(params)
}

fn translate_closure(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Expression, FailFast> {
    let parameters = match tree.subtree("Parameter List") {
        Some(list) => translate_parameter_list(list, ctx)?,
        None => Vec::new(),
    };
    let statements = match tree.subtree("Brace Statement") {
        Some(brace) => crate::dispatch::statements::translate_brace_statements(brace, ctx)?,
        None => Vec::new(),
    };
    Ok(Expression::ClosureExpression {
        parameters,
        statements,
        type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftling_common::NoComments;
    use swiftling_decoder::{decode, KeyValueAttrs};

    fn ctx() -> TranslationContext<'static> {
        TranslationContext::new(&NoComments)
    }

    #[test]
    fn translates_simple_integer_literal() {
        let tree = decode(r#"(integer_literal_expr value="3")"#).unwrap();
        let mut c = ctx();
        assert_eq!(translate_expression(&tree, &mut c).unwrap(), Expression::LiteralInt(3));
    }

    #[test]
    fn negative_attribute_prefixes_minus() {
        let tree = decode(r#"(integer_literal_expr value="3" negative)"#).unwrap();
        let mut c = ctx();
        assert_eq!(translate_expression(&tree, &mut c).unwrap(), Expression::LiteralInt(-3));
    }

    #[test]
    fn builtin_integer_literal_call_resolves_via_typerepr() {
        let src = r#"(call_expr type="Int" arg_labels=_builtinIntegerLiteral:
            (constructor_ref_call_expr (type_expr typerepr="Int"))
            (tuple_expr (integer_literal_expr value="3")))"#;
        let tree = decode(src).unwrap();
        let mut c = ctx();
        assert_eq!(translate_expression(&tree, &mut c).unwrap(), Expression::LiteralInt(3));
    }

    #[test]
    fn builtin_integer_literal_call_with_uint_typerepr() {
        let src = r#"(call_expr type="UInt8" arg_labels=_builtinIntegerLiteral:
            (constructor_ref_call_expr (type_expr typerepr="UInt8"))
            (tuple_expr (integer_literal_expr value="3")))"#;
        let tree = decode(src).unwrap();
        let mut c = ctx();
        assert_eq!(translate_expression(&tree, &mut c).unwrap(), Expression::LiteralUInt(3));
    }

    #[test]
    fn builtin_float_literal_call_resolves_double() {
        let src = r#"(call_expr type="Double" arg_labels=_builtinFloatLiteral:
            (constructor_ref_call_expr (type_expr typerepr="Double"))
            (tuple_expr (float_literal_expr value="1.5")))"#;
        let tree = decode(src).unwrap();
        let mut c = ctx();
        assert_eq!(translate_expression(&tree, &mut c).unwrap(), Expression::LiteralDouble(1.5));
    }

    #[test]
    fn float80_is_unsupported() {
        let src = r#"(call_expr type="Float80" arg_labels=_builtinFloatLiteral:
            (constructor_ref_call_expr (type_expr typerepr="Float80"))
            (tuple_expr (float_literal_expr value="1.5")))"#;
        let tree = decode(src).unwrap();
        let mut c = ctx();
        assert_eq!(translate_expression(&tree, &mut c).unwrap(), Expression::Error);
        assert_eq!(c.sink.errors().len(), 1);
    }

    #[test]
    fn array_expression_translates_elements_in_order() {
        let tree = decode(
            r#"(array_expr type="[Int]" (integer_literal_expr value="1") (integer_literal_expr value="2"))"#,
        )
        .unwrap();
        let mut c = ctx();
        let result = translate_expression(&tree, &mut c).unwrap();
        assert_eq!(
            result,
            Expression::ArrayExpression {
                elements: vec![Expression::LiteralInt(1), Expression::LiteralInt(2)],
                type_name: "[Int]".into(),
            }
        );
    }

    #[test]
    fn tuple_shuffle_decodes_absent_present_and_variadic_indices() {
        let mut kv = KeyValueAttrs::new();
        kv.insert("type", "(x: Int, y: String, z: Int)");
        kv.insert("elements", "-1, 0, -2");
        kv.insert("variadic_sources", "a, b");
        let inner_tuple = swiftling_decoder::RawTree::new(
            "tuple_expr",
            vec![],
            KeyValueAttrs::new(),
            vec![
                swiftling_decoder::RawTree::new(
                    "integer_literal_expr",
                    vec![],
                    {
                        let mut k = KeyValueAttrs::new();
                        k.insert("value", "1");
                        k
                    },
                    vec![],
                ),
            ],
        );
        let tree = swiftling_decoder::RawTree::new("tuple_shuffle_expr", vec![], kv, vec![inner_tuple]);
        let mut c = ctx();
        let result = translate_expression(&tree, &mut c).unwrap();
        match result {
            Expression::TupleShuffleExpression { labels, indices, expressions } => {
                assert_eq!(labels, vec!["x", "y", "z"]);
                assert_eq!(
                    indices,
                    vec![
                        TupleShuffleIndex::Absent,
                        TupleShuffleIndex::Present,
                        TupleShuffleIndex::Variadic { count: 2 },
                    ]
                );
                assert_eq!(expressions, vec![Expression::LiteralInt(1)]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn declaration_reference_detects_standard_library() {
        let mut kv = KeyValueAttrs::new();
        kv.insert("decl", "Swift.(file).Int.init@test.swift:1:1");
        kv.insert("type", "Int");
        let tree = swiftling_decoder::RawTree::new("declref_expr", vec![], kv, vec![]);
        let mut c = ctx();
        let result = translate_expression(&tree, &mut c).unwrap();
        assert_eq!(
            result,
            Expression::DeclarationReferenceExpression {
                identifier: "init".into(),
                type_name: "Int".into(),
                is_standard_library: true,
                is_implicit: false,
            }
        );
    }

    #[test]
    fn value_directive_overrides_any_expression() {
        struct AlwaysValue;
        impl swiftling_common::SourceFile for AlwaysValue {
            fn directive_at(&self, _line: u32) -> Option<swiftling_common::CommentDirective> {
                Some(swiftling_common::CommentDirective {
                    key: "value".into(),
                    value: "x.toString()".into(),
                })
            }
        }
        let mut kv = KeyValueAttrs::new();
        kv.insert("range", "test.swift:1:1");
        kv.insert("value", "3");
        let tree = swiftling_decoder::RawTree::new("integer_literal_expr", vec![], kv, vec![]);
        let sf = AlwaysValue;
        let mut c = TranslationContext::new(&sf);
        let result = translate_expression(&tree, &mut c).unwrap();
        assert_eq!(result, Expression::LiteralCodeExpression("x.toString()".into()));
    }
}
