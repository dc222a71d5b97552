//! Statement dispatch (spec §4.2, §4.2.1, §4.3).
//!
//! Node attribute conventions used throughout this module: a
//! declaration's own identifier is read from its `name` attribute, a
//! comma-space-separated supertype list from `inherits`, and an
//! accessor `Function Declaration` nested under a `Variable
//! Declaration` carries a standalone `getter_for`/`setter_for` marker.

use swiftling_common::SourceFile;
use swiftling_decoder::RawTree;
use swiftling_diag::FailFast;
use swiftling_ir::{
    ConvertsToExpression, EnumElement, FunctionDecl, IfCondition, IfStmt, LabeledType, Statement,
    SwitchCase, VariableDecl,
};

use crate::comments::{insertions_between, is_ignored, node_span};
use crate::context::TranslationContext;
use crate::dispatch::expressions::{translate_expression, translate_parameter_list};
use crate::type_clean::clean_up_type;

fn has_standalone(tree: &RawTree, attr: &str) -> bool {
    tree.standalone_attributes.iter().any(|a| a == attr)
}

/// `true` for members that are picked up elsewhere (an accessor nested
/// under its `Variable Declaration`, or a compiler-synthesized
/// implicit) and should not be translated as standalone statements.
fn should_skip_member(tree: &RawTree) -> bool {
    if has_standalone(tree, "implicit") {
        return true;
    }
    matches!(tree.name.as_str(), "Function Declaration" | "Constructor Declaration")
        && (is_getter_marker(tree) || is_setter_marker(tree))
}

/// `getter_for`/`get_for` both mark an accessor as a getter (spec §4.2).
fn is_getter_marker(tree: &RawTree) -> bool {
    has_standalone(tree, "getter_for") || has_standalone(tree, "get_for")
}

/// `setter_for`/`set_for` mark an accessor as a plain setter;
/// `materializeForSet_for` marks a compiler-synthesized mutator that
/// stands in for one when the property has no explicit setter (spec
/// §9 open question (c)) -- both render the same `set(value) { ... }`
/// block, so they're treated as one case here.
fn is_setter_marker(tree: &RawTree) -> bool {
    has_standalone(tree, "setter_for") || has_standalone(tree, "set_for") || has_standalone(tree, "materializeForSet_for")
}

fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        value.split(", ").map(|s| s.to_string()).collect()
    }
}

/// Translate a sequence of sibling nodes, honoring `kotlin: ignore` and
/// interleaving `kotlin: insert`/`kotlin: declaration` comment-directive
/// statements in the gaps between them (spec §4.2.2), within a fresh
/// pattern-binding scope (spec §4.3, §9: the queue is confined to one
/// brace/declaration scope).
fn translate_sequence(
    children: &[RawTree],
    ctx: &mut TranslationContext,
    in_declaration_scope: bool,
) -> Result<Vec<Statement>, FailFast> {
    let outer_queue = std::mem::take(&mut ctx.pending_bindings);
    let mut out = Vec::new();
    let mut prev_end_line: Option<u32> = None;

    for child in children {
        let span = node_span(child);
        if let (Some(prev), Some(s)) = (prev_end_line, span) {
            out.extend(insertions_between(prev, s.start_line, in_declaration_scope, ctx.source_file));
        }
        if let Some(s) = span {
            prev_end_line = Some(s.end_line);
        }

        if is_ignored(child, ctx.source_file) || should_skip_member(child) {
            continue;
        }
        if child.name == "Pattern Binding Declaration" {
            enqueue_pattern_binding(child, ctx)?;
            continue;
        }
        out.push(translate_statement(child, ctx)?);
    }

    ctx.pending_bindings = outer_queue;
    Ok(out)
}

/// Translate the statements of a `Brace Statement` (a function or
/// closure body, or a top-level code block).
pub fn translate_brace_statements(
    brace: &RawTree,
    ctx: &mut TranslationContext,
) -> Result<Vec<Statement>, FailFast> {
    translate_sequence(&brace.children, ctx, false)
}

/// Translate the member declarations of a class/struct/enum/extension/
/// protocol body.
fn translate_members(children: &[RawTree], ctx: &mut TranslationContext) -> Result<Vec<Statement>, FailFast> {
    translate_sequence(children, ctx, true)
}

/// Enqueue one pattern-binding entry per `(Pattern, Expression?)` child
/// pair of a `Pattern Binding Declaration` (spec §4.3).
pub(crate) fn enqueue_pattern_binding(tree: &RawTree, ctx: &mut TranslationContext) -> Result<(), FailFast> {
    let pattern = match tree.subtree("Pattern Named") {
        Some(p) => p,
        None => {
            ctx.report_unexpected_structure(
                tree,
                "enqueue_pattern_binding",
                "expected a `Pattern Named` child",
            )?;
            ctx.pending_bindings.enqueue_error_sentinel();
            return Ok(());
        }
    };
    let identifier = pattern.attribute("name").unwrap_or_default().to_string();
    let type_name = clean_up_type(pattern.attribute("type").unwrap_or_default());

    let initializer = tree
        .children
        .iter()
        .find(|c| c.name != "Pattern Named")
        .map(|expr_tree| translate_expression(expr_tree, ctx))
        .transpose()?;

    match initializer {
        Some(expr) => ctx.pending_bindings.enqueue(identifier, type_name, expr),
        None => ctx.pending_bindings.enqueue_uninitialized(identifier, type_name),
    }
    Ok(())
}

pub fn translate_statement(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Statement, FailFast> {
    if let Some(directive) = crate::comments::value_override(tree, ctx.source_file) {
        return Ok(Statement::Expression(directive));
    }

    match tree.name.as_str() {
        "Top Level Code Declaration" => translate_top_level_code(tree, ctx),
        "Import Declaration" => Ok(Statement::ImportDeclaration {
            name: tree.attribute("name").unwrap_or_default().to_string(),
        }),
        "Typealias Declaration" => Ok(Statement::TypealiasDeclaration {
            identifier: tree.attribute("name").unwrap_or_default().to_string(),
            type_name: clean_up_type(tree.attribute("type").unwrap_or_default()),
            is_implicit: has_standalone(tree, "implicit"),
        }),
        "Class Declaration" => {
            let members = translate_members(&tree.children, ctx)?;
            Ok(Statement::ClassDeclaration {
                name: tree.attribute("name").unwrap_or_default().to_string(),
                inherits: split_list(tree.attribute("inherits").unwrap_or_default()),
                members,
            })
        }
        "Struct Declaration" => {
            let members = translate_members(&tree.children, ctx)?;
            Ok(Statement::StructDeclaration {
                name: tree.attribute("name").unwrap_or_default().to_string(),
                inherits: split_list(tree.attribute("inherits").unwrap_or_default()),
                members,
            })
        }
        "Enum Declaration" => translate_enum(tree, ctx),
        "Protocol Declaration" => {
            let members = translate_members(&tree.children, ctx)?;
            Ok(Statement::ProtocolDeclaration {
                name: tree.attribute("name").unwrap_or_default().to_string(),
                members,
            })
        }
        "Extension Declaration" => translate_extension(tree, ctx),
        "Function Declaration" | "Constructor Declaration" => {
            translate_function(tree, ctx).map(Statement::FunctionDeclaration)
        }
        "Variable Declaration" => translate_variable(tree, ctx).map(Statement::VariableDeclaration),
        "If Statement" | "Guard Statement" => translate_if(tree, ctx).map(Statement::IfStatement),
        "Switch Statement" => translate_switch(tree, ctx),
        "For Each Statement" => translate_for_each(tree, ctx),
        "While Statement" => translate_while(tree, ctx),
        "Return Statement" => Ok(Statement::ReturnStatement {
            expr: match tree.children.last() {
                Some(e) => Some(translate_expression(e, ctx)?),
                None => None,
            },
        }),
        "Throw Statement" => {
            let expr_tree = match tree.children.last() {
                Some(e) => e,
                None => {
                    ctx.report_unexpected_structure(tree, "translate_statement", "expected an expression to throw")?;
                    return Ok(Statement::Error);
                }
            };
            Ok(Statement::ThrowStatement { expr: translate_expression(expr_tree, ctx)? })
        }
        "Defer Statement" => {
            let body = match tree.subtree("Brace Statement") {
                Some(b) => translate_brace_statements(b, ctx)?,
                None => Vec::new(),
            };
            Ok(Statement::DeferStatement { body })
        }
        "Break Statement" => Ok(Statement::BreakStatement),
        "Continue Statement" => Ok(Statement::ContinueStatement),
        "Assign Expression" => {
            let lhs_tree = match tree.child(0) {
                Some(t) => t,
                None => {
                    ctx.report_unexpected_structure(tree, "translate_statement", "expected a left-hand side")?;
                    return Ok(Statement::Error);
                }
            };
            let rhs_tree = match tree.child(1) {
                Some(t) => t,
                None => {
                    ctx.report_unexpected_structure(tree, "translate_statement", "expected a right-hand side")?;
                    return Ok(Statement::Error);
                }
            };
            Ok(Statement::AssignmentStatement {
                lhs: translate_expression(lhs_tree, ctx)?,
                rhs: translate_expression(rhs_tree, ctx)?,
            })
        }
        name if name.ends_with("Expression") => {
            Ok(Statement::Expression(translate_expression(tree, ctx)?))
        }
        _ => {
            ctx.report_unexpected_structure(
                tree,
                "translate_statement",
                format!("no translation rule for node `{}`", tree.name),
            )?;
            Ok(Statement::Error)
        }
    }
}

/// A `Top Level Code Declaration` wraps exactly one `Brace Statement`;
/// translating it "returns the first result" of that block (spec
/// §4.2) -- the block's own contents are the one statement this
/// declaration stands for when it must be treated as a single node.
/// `translate()` (crate root) instead inlines the whole block directly
/// into the file's top-level statement list.
fn translate_top_level_code(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Statement, FailFast> {
    let brace = match tree.subtree("Brace Statement") {
        Some(b) => b,
        None => {
            ctx.report_unexpected_structure(tree, "translate_top_level_code", "expected a `Brace Statement` child")?;
            return Ok(Statement::Error);
        }
    };
    let statements = translate_brace_statements(brace, ctx)?;
    Ok(statements.into_iter().next().unwrap_or(Statement::Error))
}

/// The statements of the `Top Level Code Declaration` wrapped by `tree`,
/// in full (used by `translate()` to flatten top-level code blocks
/// instead of collapsing them to one statement).
pub fn top_level_code_statements(
    tree: &RawTree,
    ctx: &mut TranslationContext,
) -> Result<Vec<Statement>, FailFast> {
    match tree.subtree("Brace Statement") {
        Some(brace) => translate_brace_statements(brace, ctx),
        None => {
            ctx.report_unexpected_structure(tree, "top_level_code_statements", "expected a `Brace Statement` child")?;
            Ok(Vec::new())
        }
    }
}

fn translate_enum(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Statement, FailFast> {
    let mut elements = Vec::new();
    let mut member_children = Vec::new();
    for child in &tree.children {
        if child.name == "Enum Element Declaration" {
            elements.push(translate_enum_element(child, ctx)?);
        } else {
            member_children.push(child.clone());
        }
    }
    let members = translate_members(&member_children, ctx)?;
    Ok(Statement::EnumDeclaration {
        access: tree.attribute("access").map(|s| s.to_string()),
        name: tree.attribute("name").unwrap_or_default().to_string(),
        inherits: split_list(tree.attribute("inherits").unwrap_or_default()),
        elements,
        members,
        is_implicit: has_standalone(tree, "implicit"),
    })
}

/// Parse an enum case's `interface` attribute (`"(Int, label: String) ->
/// EnumName"`) into its associated-value labels and types.
fn translate_enum_element(tree: &RawTree, ctx: &mut TranslationContext) -> Result<EnumElement, FailFast> {
    let name = tree.attribute("name").unwrap_or_default().to_string();
    if name.contains('(') {
        ctx.report_unexpected_structure(
            tree,
            "translate_enum_element",
            format!("enum case name `{name}` must not contain `(`"),
        )?;
    }
    let associated_values = match tree.attribute("interface") {
        Some(interface) => parse_associated_values(interface),
        None => Vec::new(),
    };
    let annotations = tree
        .attribute("annotations")
        .map(|raw| split_list(raw))
        .filter(|v| !v.is_empty());
    Ok(EnumElement { name, associated_values, annotations })
}

fn parse_associated_values(interface: &str) -> Vec<LabeledType> {
    let params = match interface.split_once(" -> ") {
        Some((params, _ret)) => params,
        None => interface,
    };
    let inner = params.strip_prefix('(').and_then(|s| s.strip_suffix(')')).unwrap_or(params);
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split(", ")
        .map(|component| match component.split_once(':') {
            Some((label, type_name)) => LabeledType {
                label: label.trim().to_string(),
                type_name: clean_up_type(type_name.trim()),
            },
            None => LabeledType { label: String::new(), type_name: clean_up_type(component.trim()) },
        })
        .collect()
}

fn translate_extension(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Statement, FailFast> {
    let type_name = tree.attribute("name").unwrap_or_default().to_string();
    let mut members = translate_members(&tree.children, ctx)?;
    for member in &mut members {
        match member {
            Statement::FunctionDeclaration(f) if f.extends_type.is_none() => {
                f.extends_type = Some(type_name.clone());
            }
            Statement::VariableDeclaration(v) if v.extends_type.is_none() => {
                v.extends_type = Some(type_name.clone());
            }
            _ => {}
        }
    }
    Ok(Statement::ExtensionDeclaration { type_name, members })
}

fn translate_function(tree: &RawTree, ctx: &mut TranslationContext) -> Result<FunctionDecl, FailFast> {
    let function_type = tree.attribute("type").unwrap_or_default().to_string();
    let (params_repr, return_type) = match function_type.split_once(" -> ") {
        Some((params, ret)) => (params.to_string(), clean_up_type(ret)),
        None => (function_type.clone(), String::new()),
    };
    let is_static = params_repr.contains(".Type");
    let is_mutating = function_type.contains("inout");

    let parameters = match tree.subtree("Parameter List") {
        Some(list) => translate_parameter_list(list, ctx)?,
        None => Vec::new(),
    };
    let statements = match tree.subtree("Brace Statement") {
        Some(brace) => Some(translate_brace_statements(brace, ctx)?),
        None => None,
    };
    let annotations = tree
        .attribute("annotations")
        .map(|raw| split_list(raw))
        .filter(|v| !v.is_empty());

    Ok(FunctionDecl {
        prefix: tree.attribute("name").unwrap_or_default().to_string(),
        parameters,
        return_type,
        function_type,
        is_implicit: has_standalone(tree, "implicit"),
        is_static,
        is_mutating,
        extends_type: None,
        statements,
        access: tree.attribute("access").map(|s| s.to_string()),
        annotations,
    })
}

/// An accessor (`getter_for`/`setter_for`) nested under a `Variable
/// Declaration`, if present (spec §4.2: "translate accessor children by
/// getter_for/setter_for keys").
fn find_accessor<'a>(tree: &'a RawTree, is_marker: impl Fn(&RawTree) -> bool) -> Option<&'a RawTree> {
    tree.children
        .iter()
        .find(|c| matches!(c.name.as_str(), "Function Declaration" | "Constructor Declaration") && is_marker(c))
}

fn translate_variable(tree: &RawTree, ctx: &mut TranslationContext) -> Result<VariableDecl, FailFast> {
    let identifier = tree.attribute("name").unwrap_or_default().to_string();
    let type_name = clean_up_type(tree.attribute("type").unwrap_or_default());

    let getter = match find_accessor(tree, is_getter_marker) {
        Some(g) => Some(Box::new(translate_function(g, ctx)?)),
        None => None,
    };
    let setter = match find_accessor(tree, is_setter_marker) {
        Some(s) => Some(Box::new(translate_function(s, ctx)?)),
        None => None,
    };

    let expression = ctx.pending_bindings.dequeue_matching(&identifier, &type_name);

    let annotations = tree
        .attribute("annotations")
        .map(|raw| split_list(raw))
        .filter(|v| !v.is_empty());

    Ok(VariableDecl {
        identifier,
        type_name,
        expression,
        getter,
        setter,
        is_let: has_standalone(tree, "let"),
        is_implicit: has_standalone(tree, "implicit"),
        is_static: has_standalone(tree, "static"),
        extends_type: None,
        annotations,
    })
}

/// Parse an `if`/`guard` statement's condition list (spec §4.2.1): every
/// child except a trailing `If Statement` (the `else if` chain) or the
/// one or two trailing `Brace Statement`s (then/else bodies) is a
/// condition. A `Pattern Named` + `Optional Some Element` pair under a
/// condition child marks an `if let`/`guard let` binding; anything else
/// is a plain boolean expression.
fn translate_if(tree: &RawTree, ctx: &mut TranslationContext) -> Result<IfStmt, FailFast> {
    let is_guard = tree.name == "Guard Statement";

    let trailing_if = match tree.children.last() {
        Some(c) if c.name == "If Statement" => Some(c),
        _ => None,
    };
    let body_children = if trailing_if.is_some() {
        &tree.children[..tree.children.len() - 1]
    } else {
        &tree.children[..]
    };

    let brace_positions: Vec<usize> = body_children
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name == "Brace Statement")
        .map(|(i, _)| i)
        .collect();
    let first_brace = brace_positions.first().copied().unwrap_or(body_children.len());

    let mut conditions = Vec::with_capacity(first_brace);
    for cond in &body_children[..first_brace] {
        conditions.push(translate_condition(cond, ctx)?);
    }

    let statements = match brace_positions.first() {
        Some(&i) => translate_brace_statements(&body_children[i], ctx)?,
        None => {
            ctx.report_unexpected_structure(tree, "translate_if", "expected a then-branch `Brace Statement`")?;
            Vec::new()
        }
    };

    let else_statement = if let Some(next_if) = trailing_if {
        Some(Box::new(Statement::IfStatement(translate_if(next_if, ctx)?)))
    } else if let Some(&i) = brace_positions.get(1) {
        let else_statements = translate_brace_statements(&body_children[i], ctx)?;
        Some(Box::new(wrap_block(else_statements)))
    } else {
        None
    };

    Ok(IfStmt { conditions, statements, else_statement, is_guard })
}

/// There's no bare-block `Statement` variant; a plain `else { ... }`
/// (as opposed to an `else if`) is represented as an always-true
/// single-branch `IfStatement` so `else_statement` can stay a single
/// `Statement` rather than a `Vec`.
fn wrap_block(statements: Vec<Statement>) -> Statement {
    Statement::IfStatement(IfStmt {
        conditions: vec![IfCondition::Expr(swiftling_ir::Expression::LiteralBool(true))],
        statements,
        else_statement: None,
        is_guard: false,
    })
}

fn translate_condition(tree: &RawTree, ctx: &mut TranslationContext) -> Result<IfCondition, FailFast> {
    if tree.name == "Pattern Named" {
        let identifier = tree.attribute("name").unwrap_or_default().to_string();
        let type_name = clean_up_type(tree.attribute("type").unwrap_or_default());
        let expression = match tree.subtree("Optional Some Element") {
            Some(some) => match some.children.first() {
                Some(inner) => Some(translate_expression(inner, ctx)?),
                None => None,
            },
            None => None,
        };
        return Ok(IfCondition::Let(VariableDecl {
            identifier,
            type_name,
            expression,
            getter: None,
            setter: None,
            is_let: true,
            is_implicit: false,
            is_static: false,
            extends_type: None,
            annotations: None,
        }));
    }
    Ok(IfCondition::Expr(translate_expression(tree, ctx)?))
}

fn translate_switch(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Statement, FailFast> {
    let scrutinee = match tree.child(0) {
        Some(t) => t,
        None => {
            ctx.report_unexpected_structure(tree, "translate_switch", "expected a scrutinee expression")?;
            return Ok(Statement::Error);
        }
    };
    let expr = translate_expression(scrutinee, ctx)?;

    let mut cases = Vec::new();
    for case in tree.subtrees("Case Label") {
        cases.push(translate_switch_case(case, ctx)?);
    }
    for case in tree.subtrees("Default Case") {
        cases.push(translate_switch_case(case, ctx)?);
    }

    Ok(Statement::SwitchStatement { converts_to_expression: None::<ConvertsToExpression>, expr, cases })
}

fn translate_switch_case(tree: &RawTree, ctx: &mut TranslationContext) -> Result<SwitchCase, FailFast> {
    let expression = match tree.children.iter().find(|c| c.name != "Brace Statement") {
        Some(e) => Some(translate_expression(e, ctx)?),
        None => None,
    };
    let statements = match tree.subtree("Brace Statement") {
        Some(brace) => translate_brace_statements(brace, ctx)?,
        None => Vec::new(),
    };
    Ok(SwitchCase { expression, statements })
}

fn translate_for_each(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Statement, FailFast> {
    let pattern = match tree.subtree("Pattern Named") {
        Some(p) => p,
        None => {
            ctx.report_unexpected_structure(tree, "translate_for_each", "expected a `Pattern Named` child")?;
            return Ok(Statement::Error);
        }
    };
    let variable = pattern.attribute("name").unwrap_or_default().to_string();

    let collection_tree = match tree.child(2) {
        Some(t) => t,
        None => {
            ctx.report_unexpected_structure(tree, "translate_for_each", "expected a collection expression")?;
            return Ok(Statement::Error);
        }
    };
    let collection = translate_expression(collection_tree, ctx)?;

    let body = match tree.subtree("Brace Statement") {
        Some(brace) => translate_brace_statements(brace, ctx)?,
        None => Vec::new(),
    };

    Ok(Statement::ForEachStatement { collection, variable, body })
}

fn translate_while(tree: &RawTree, ctx: &mut TranslationContext) -> Result<Statement, FailFast> {
    let condition = match tree.children.iter().find(|c| c.name != "Brace Statement") {
        Some(t) => t,
        None => {
            ctx.report_unexpected_structure(tree, "translate_while", "expected a condition expression")?;
            return Ok(Statement::Error);
        }
    };
    let expr = translate_expression(condition, ctx)?;
    let body = match tree.subtree("Brace Statement") {
        Some(brace) => translate_brace_statements(brace, ctx)?,
        None => Vec::new(),
    };
    Ok(Statement::WhileStatement { expr, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftling_common::NoComments;
    use swiftling_decoder::{decode, KeyValueAttrs, RawTree as RT};

    fn ctx() -> TranslationContext<'static> {
        TranslationContext::new(&NoComments)
    }

    #[test]
    fn translates_return_statement() {
        let tree = decode(r#"(return_stmt (integer_literal_expr value="1"))"#).unwrap();
        let mut c = ctx();
        let result = translate_statement(&tree, &mut c).unwrap();
        assert_eq!(
            result,
            Statement::ReturnStatement { expr: Some(swiftling_ir::Expression::LiteralInt(1)) }
        );
    }

    #[test]
    fn pattern_binding_initializer_reattaches_to_following_variable_declaration() {
        let mut pattern_kv = KeyValueAttrs::new();
        pattern_kv.insert("name", "x");
        pattern_kv.insert("type", "Int");
        let pattern = RT::new("pattern_named", vec![], pattern_kv, vec![]);
        let mut lit_kv = KeyValueAttrs::new();
        lit_kv.insert("value", "3");
        let literal = RT::new("integer_literal_expr", vec![], lit_kv, vec![]);
        let binding = RT::new("pattern_binding_decl", vec![], KeyValueAttrs::new(), vec![pattern, literal]);

        let mut var_kv = KeyValueAttrs::new();
        var_kv.insert("name", "x");
        var_kv.insert("type", "Int");
        let var_decl = RT::new("var_decl", vec!["let".to_string()], var_kv, vec![]);

        let mut c = ctx();
        let result = translate_sequence(&[binding, var_decl], &mut c, true).unwrap();
        assert_eq!(result.len(), 1);
        match &result[0] {
            Statement::VariableDeclaration(v) => {
                assert_eq!(v.identifier, "x");
                assert_eq!(v.expression, Some(swiftling_ir::Expression::LiteralInt(3)));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn enum_element_interface_parses_associated_values() {
        let mut kv = KeyValueAttrs::new();
        kv.insert("name", "failure");
        kv.insert("interface", "(code: Int, String) -> MyError");
        let tree = RT::new("enum_element_decl", vec![], kv, vec![]);
        let mut c = ctx();
        let element = translate_enum_element(&tree, &mut c).unwrap();
        assert_eq!(element.name, "failure");
        assert_eq!(
            element.associated_values,
            vec![
                LabeledType { label: "code".into(), type_name: "Int".into() },
                LabeledType { label: "".into(), type_name: "String".into() },
            ]
        );
    }

    #[test]
    fn extension_members_inherit_extended_type() {
        let mut fn_kv = KeyValueAttrs::new();
        fn_kv.insert("name", "greet");
        fn_kv.insert("type", "() -> ()");
        let function = RT::new("func_decl", vec![], fn_kv, vec![]);

        let mut ext_kv = KeyValueAttrs::new();
        ext_kv.insert("name", "String");
        let extension = RT::new("extension_decl", vec![], ext_kv, vec![function]);

        let mut c = ctx();
        let result = translate_statement(&extension, &mut c).unwrap();
        match result {
            Statement::ExtensionDeclaration { type_name, members } => {
                assert_eq!(type_name, "String");
                match &members[0] {
                    Statement::FunctionDeclaration(f) => {
                        assert_eq!(f.extends_type.as_deref(), Some("String"));
                    }
                    other => panic!("unexpected: {other:?}"),
                }
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn ignored_statement_is_skipped_but_an_adjacent_sibling_is_kept() {
        struct IgnoreLineOne;
        impl SourceFile for IgnoreLineOne {
            fn directive_at(&self, line: u32) -> Option<swiftling_common::CommentDirective> {
                if line == 1 {
                    Some(swiftling_common::CommentDirective { key: "ignore".into(), value: String::new() })
                } else {
                    None
                }
            }
        }
        let mut kv_a = KeyValueAttrs::new();
        kv_a.insert("range", "test.swift:1:1");
        let a = RT::new("break_stmt", vec![], kv_a, vec![]);
        let mut kv_b = KeyValueAttrs::new();
        kv_b.insert("range", "test.swift:2:1");
        let b = RT::new("continue_stmt", vec![], kv_b, vec![]);

        let sf = IgnoreLineOne;
        let mut c = TranslationContext::new(&sf);
        let result = translate_sequence(&[a, b], &mut c, false).unwrap();
        assert_eq!(result, vec![Statement::ContinueStatement]);
    }
}
