//! Declaration rendering (spec §4.4): classes, structs-as-data-classes,
//! enums (sealed vs. `enum class`, dispatched through the registry),
//! functions/constructors, and properties.

use swiftling_ir::{EnumElement, FunctionDecl, FunctionParameter, Statement, VariableDecl};

use crate::context::EmitContext;
use crate::expression::emit_expression;
use crate::registry::EnumKind;
use crate::statement::{emit_statement_sequence, render_block};
use crate::type_map::map_type;
use crate::util::{capitalize, fits_line_budget};

/// Inheritances get the first (super-class) entry called as a
/// constructor; any remaining entries are interfaces and stay bare (spec
/// §4.4).
fn format_inherits(inherits: &[String]) -> String {
    if inherits.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = inherits
        .iter()
        .enumerate()
        .map(|(i, t)| if i == 0 { format!("{t}()") } else { t.clone() })
        .collect();
    format!(" : {}", parts.join(", "))
}

fn wrap_params(head: &str, params: &[String], indent: &str) -> String {
    let inner = format!("{indent}\t");
    let mut out = format!("{head}(\n");
    for (i, p) in params.iter().enumerate() {
        out.push_str(&inner);
        out.push_str(p);
        if i + 1 < params.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(indent);
    out.push(')');
    out
}

pub fn render_class_like(
    keyword: &str,
    access: Option<&str>,
    name: &str,
    inherits: &[String],
    members: &[Statement],
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    let access_prefix = access.map(|a| format!("{a} ")).unwrap_or_default();
    format!(
        "{access_prefix}{keyword} {name}{} {}",
        format_inherits(inherits),
        render_block(members, indent, ctx)
    )
}

/// A Swift `struct` becomes a Kotlin `data class` (spec §4.4): plain
/// stored properties (no custom accessor, not from an extension) are
/// promoted into the primary constructor; everything else stays a body
/// member.
pub fn render_struct(name: &str, inherits: &[String], members: &[Statement], indent: &str, ctx: &mut EmitContext) -> String {
    let mut ctor_params = Vec::new();
    let mut body_members = Vec::new();
    for member in members {
        match member {
            Statement::VariableDeclaration(v)
                if v.getter.is_none() && v.setter.is_none() && v.extends_type.is_none() =>
            {
                let keyword = if v.is_let { "val" } else { "var" };
                let default = v
                    .expression
                    .as_ref()
                    .map(|e| format!(" = {}", emit_expression(e, indent, ctx)))
                    .unwrap_or_default();
                ctor_params.push(format!("{keyword} {}: {}{default}", v.identifier, map_type(&v.type_name)));
            }
            other => body_members.push(other.clone()),
        }
    }
    let flat = format!("data class {name}({})", ctor_params.join(", "));
    let header = if fits_line_budget(indent, &flat) {
        flat
    } else {
        wrap_params(&format!("data class {name}"), &ctor_params, indent)
    };
    let suffix = format_inherits(inherits);
    if body_members.is_empty() {
        format!("{header}{suffix}")
    } else {
        format!("{header}{suffix} {}", render_block(&body_members, indent, ctx))
    }
}

pub fn render_enum(
    access: Option<&str>,
    name: &str,
    inherits: &[String],
    elements: &[EnumElement],
    members: &[Statement],
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    let kind = ctx.enums.kind_of(name).unwrap_or_else(|| {
        if elements.iter().any(|e| !e.associated_values.is_empty()) {
            EnumKind::Sealed
        } else {
            EnumKind::EnumClass
        }
    });
    ctx.enums.register(name.to_string(), kind);
    let access_prefix = access.map(|a| format!("{a} ")).unwrap_or_default();
    match kind {
        EnumKind::Sealed => render_sealed_enum(&access_prefix, name, inherits, elements, members, indent, ctx),
        EnumKind::EnumClass => render_enum_class(&access_prefix, name, elements, members, indent, ctx),
    }
}

fn render_sealed_enum(
    access: &str,
    name: &str,
    inherits: &[String],
    elements: &[EnumElement],
    members: &[Statement],
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    let inner = format!("{indent}\t");
    let mut lines: Vec<String> = elements
        .iter()
        .map(|el| {
            let capitalized = capitalize(&el.name);
            if el.associated_values.is_empty() {
                format!("{inner}class {capitalized}: {name}()")
            } else {
                let params: Vec<String> = el
                    .associated_values
                    .iter()
                    .map(|lt| format!("val {}: {}", lt.label, map_type(&lt.type_name)))
                    .collect();
                format!("{inner}class {capitalized}({}): {name}()", params.join(", "))
            }
        })
        .collect();
    let member_text = emit_statement_sequence(members, &inner, ctx);
    if !member_text.is_empty() {
        lines.push(String::new());
        lines.push(member_text);
    }
    format!("{access}sealed class {name}{} {{\n{}\n{indent}}}", format_inherits(inherits), lines.join("\n"))
}

fn render_enum_class(
    access: &str,
    name: &str,
    elements: &[EnumElement],
    members: &[Statement],
    indent: &str,
    ctx: &mut EmitContext,
) -> String {
    let inner = format!("{indent}\t");
    let case_list = elements.iter().map(|e| capitalize(&e.name)).collect::<Vec<_>>().join(", ");
    let member_text = emit_statement_sequence(members, &inner, ctx);
    if member_text.is_empty() {
        format!("{access}enum class {name} {{\n{inner}{case_list}\n{indent}}}")
    } else {
        format!("{access}enum class {name} {{\n{inner}{case_list};\n\n{member_text}\n{indent}}}")
    }
}

fn render_params(params: &[FunctionParameter], indent: &str, ctx: &mut EmitContext) -> Vec<String> {
    params
        .iter()
        .map(|p| {
            let default = p
                .default_value
                .as_ref()
                .map(|d| format!(" = {}", emit_expression(d, indent, ctx)))
                .unwrap_or_default();
            format!("{}: {}{default}", p.label, map_type(&p.type_name))
        })
        .collect()
}

pub fn render_function(f: &FunctionDecl, indent: &str, ctx: &mut EmitContext) -> String {
    let params = render_params(&f.parameters, indent, ctx);

    if f.prefix == "init" {
        let flat = format!("constructor({})", params.join(", "));
        let sig = if fits_line_budget(indent, &flat) { flat } else { wrap_params("constructor", &params, indent) };
        return match &f.statements {
            Some(stmts) => format!("{sig} {}", render_block(stmts, indent, ctx)),
            None => sig,
        };
    }

    let access = f.access.as_deref().map(|a| format!("{a} ")).unwrap_or_default();
    let name = match &f.extends_type {
        Some(t) => format!("{}.{}", map_type(t), f.prefix),
        None => f.prefix.clone(),
    };
    let return_type = map_type(&f.return_type);
    let return_suffix = if f.return_type.is_empty() || return_type == "Unit" {
        String::new()
    } else {
        format!(": {return_type}")
    };
    let head = format!("{access}fun {name}");
    let flat = format!("{head}({}){return_suffix}", params.join(", "));
    let sig = if fits_line_budget(indent, &flat) {
        flat
    } else {
        format!("{}{return_suffix}", wrap_params(&head, &params, indent))
    };
    match &f.statements {
        Some(stmts) => format!("{sig} {}", render_block(stmts, indent, ctx)),
        None => sig,
    }
}

/// A `var`/`let` becomes `val` when immutable or getter-only, `var`
/// otherwise (spec §4.4); extension properties prefix the receiver type.
pub fn render_variable(v: &VariableDecl, indent: &str, ctx: &mut EmitContext) -> String {
    let keyword = if v.is_let || (v.getter.is_some() && v.setter.is_none()) { "val" } else { "var" };
    let name = match &v.extends_type {
        Some(t) => format!("{}.{}", map_type(t), v.identifier),
        None => v.identifier.clone(),
    };
    let init = v.expression.as_ref().map(|e| format!(" = {}", emit_expression(e, indent, ctx))).unwrap_or_default();
    let mut out = format!("{keyword} {name}: {}{init}", map_type(&v.type_name));

    if let Some(getter) = &v.getter {
        if let Some(stmts) = &getter.statements {
            let get_indent = format!("{indent}\t");
            out.push_str(&format!("\n{get_indent}get() {}", render_block(stmts, &get_indent, ctx)));
        }
    }
    if let Some(setter) = &v.setter {
        if let Some(stmts) = &setter.statements {
            let set_indent = format!("{indent}\t");
            let param = setter.parameters.first().map(|p| p.label.clone()).unwrap_or_else(|| "value".to_string());
            out.push_str(&format!("\n{set_indent}set({param}) {}", render_block(stmts, &set_indent, ctx)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftling_diag::DiagnosticSink;
    use swiftling_ir::LabeledType;

    #[test]
    fn sealed_enum_renders_nested_classes() {
        let mut sink = DiagnosticSink::default();
        let mut ctx = EmitContext::new(&mut sink);
        ctx.enums.register("Shape", EnumKind::Sealed);
        let elements = vec![
            EnumElement { name: "circle".into(), associated_values: vec![], annotations: None },
            EnumElement {
                name: "rect".into(),
                associated_values: vec![
                    LabeledType { label: "w".into(), type_name: "Int32".into() },
                    LabeledType { label: "h".into(), type_name: "Int32".into() },
                ],
                annotations: None,
            },
        ];
        let out = render_enum(None, "Shape", &[], &elements, &[], "", &mut ctx);
        assert_eq!(
            out,
            "sealed class Shape {\n\tclass Circle: Shape()\n\tclass Rect(val w: Int, val h: Int): Shape()\n}"
        );
    }

    #[test]
    fn enum_class_renders_comma_separated_cases() {
        let mut sink = DiagnosticSink::default();
        let mut ctx = EmitContext::new(&mut sink);
        let elements = vec![
            EnumElement { name: "red".into(), associated_values: vec![], annotations: None },
            EnumElement { name: "green".into(), associated_values: vec![], annotations: None },
        ];
        let out = render_enum(None, "Color", &[], &elements, &[], "", &mut ctx);
        assert_eq!(out, "enum class Color {\n\tRed, Green\n}");
    }

    #[test]
    fn struct_promotes_stored_properties_to_constructor() {
        let mut sink = DiagnosticSink::default();
        let mut ctx = EmitContext::new(&mut sink);
        let members = vec![
            Statement::VariableDeclaration(VariableDecl {
                identifier: "w".into(),
                type_name: "Int32".into(),
                expression: None,
                getter: None,
                setter: None,
                is_let: true,
                is_implicit: false,
                is_static: false,
                extends_type: None,
                annotations: None,
            }),
            Statement::VariableDeclaration(VariableDecl {
                identifier: "h".into(),
                type_name: "Int32".into(),
                expression: None,
                getter: None,
                setter: None,
                is_let: false,
                is_implicit: false,
                is_static: false,
                extends_type: None,
                annotations: None,
            }),
        ];
        let out = render_struct("Size", &[], &members, "", &mut ctx);
        assert_eq!(out, "data class Size(val w: Int, var h: Int)");
    }
}
