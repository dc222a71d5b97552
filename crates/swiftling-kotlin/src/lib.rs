//! The Emitter (spec §4.4): renders a `TranslationUnit` as Kotlin source
//! text. Declarations are rendered in source order, separated by blank
//! lines per spec's packing rule; any free-standing top-level statements
//! (Swift's implicit top-level `main`) are gathered into a synthesized
//! `fun main(args: Array<String>)`.

mod call;
pub mod context;
pub mod declaration;
pub mod error;
pub mod expression;
pub mod registry;
pub mod statement;
pub mod type_map;
pub mod util;

use swiftling_ir::{EnumElement, Statement, TranslationUnit};

pub use context::EmitContext;
pub use error::EmitWarning;
pub use registry::{EnumKind, EnumRegistry, FunctionTranslation, FunctionTranslationRegistry};

pub fn kotlin_from_ir(unit: &TranslationUnit, ctx: &mut EmitContext) -> String {
    register_enums(&unit.statements, ctx);

    let mut declarations: Vec<&Statement> = Vec::new();
    let mut free_standing: Vec<&Statement> = Vec::new();
    for stmt in &unit.statements {
        if is_declaration(stmt) {
            declarations.push(stmt);
        } else {
            free_standing.push(stmt);
        }
    }

    let decl_owned: Vec<Statement> = declarations.into_iter().cloned().collect();
    let mut out = statement::emit_statement_sequence(&decl_owned, "", ctx);

    if !free_standing.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        let body: Vec<Statement> = free_standing.into_iter().cloned().collect();
        let block = statement::render_block(&body, "", ctx);
        out.push_str(&format!("fun main(args: Array<String>) {block}"));
    }
    out.push('\n');
    out
}

fn is_declaration(stmt: &Statement) -> bool {
    matches!(
        stmt,
        Statement::ImportDeclaration { .. }
            | Statement::TypealiasDeclaration { .. }
            | Statement::ClassDeclaration { .. }
            | Statement::StructDeclaration { .. }
            | Statement::CompanionObject { .. }
            | Statement::EnumDeclaration { .. }
            | Statement::ProtocolDeclaration { .. }
            | Statement::ExtensionDeclaration { .. }
            | Statement::FunctionDeclaration(_)
            | Statement::VariableDeclaration(_)
    )
}

/// A caller that skips registering enum dispatch kinds up front still
/// gets correct output: this pre-pass walks the whole unit (including
/// nested members) registering each `EnumDeclaration`'s inferred kind
/// before anything is rendered, so a `DotExpression` referencing an enum
/// declared later in the file still dispatches correctly.
fn register_enums(stmts: &[Statement], ctx: &mut EmitContext) {
    for stmt in stmts {
        match stmt {
            Statement::EnumDeclaration { name, elements, members, .. } => {
                if ctx.enums.kind_of(name).is_none() {
                    ctx.enums.register(name.clone(), infer_kind(elements));
                }
                register_enums(members, ctx);
            }
            Statement::ClassDeclaration { members, .. }
            | Statement::StructDeclaration { members, .. }
            | Statement::CompanionObject { members }
            | Statement::ProtocolDeclaration { members, .. }
            | Statement::ExtensionDeclaration { members, .. } => register_enums(members, ctx),
            _ => {}
        }
    }
}

fn infer_kind(elements: &[EnumElement]) -> EnumKind {
    if elements.iter().any(|e| !e.associated_values.is_empty()) {
        EnumKind::Sealed
    } else {
        EnumKind::EnumClass
    }
}
