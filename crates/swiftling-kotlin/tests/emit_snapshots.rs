//! Snapshot tests for the emitter's rendering of whole declarations,
//! in the teacher's `mesh-typeck`/`snow-typeck` `tests/diagnostics.rs`
//! style: build a small IR fixture by hand, render it, snapshot the
//! text. Inline snapshots (`@"..."`) so there's no separate `.snap`
//! file to accept.

use swiftling_diag::DiagnosticSink;
use swiftling_ir::{
    EnumElement, FunctionDecl, FunctionParameter, LabeledType, Statement, TranslationUnit, VariableDecl,
};
use swiftling_kotlin::{kotlin_from_ir, EmitContext};

fn render(statements: Vec<Statement>) -> String {
    let mut sink = DiagnosticSink::default();
    let mut ctx = EmitContext::new(&mut sink);
    let unit = TranslationUnit::new(statements);
    kotlin_from_ir(&unit, &mut ctx)
}

#[test]
fn sealed_enum_with_struct_and_main() {
    let shape = Statement::EnumDeclaration {
        access: None,
        name: "Shape".into(),
        inherits: vec![],
        elements: vec![
            EnumElement { name: "circle".into(), associated_values: vec![LabeledType { label: "radius".into(), type_name: "Double".into() }], annotations: None },
            EnumElement { name: "square".into(), associated_values: vec![LabeledType { label: "side".into(), type_name: "Double".into() }], annotations: None },
        ],
        members: vec![],
        is_implicit: false,
    };
    let out = render(vec![shape]);
    insta::assert_snapshot!(out, @r###"
    sealed class Shape {
    	class Circle(val radius: Double): Shape()
    	class Square(val side: Double): Shape()
    }
    "###);
}

#[test]
fn plain_enum_with_top_level_main() {
    let color = Statement::EnumDeclaration {
        access: None,
        name: "Direction".into(),
        inherits: vec![],
        elements: vec![
            EnumElement { name: "north".into(), associated_values: vec![], annotations: None },
            EnumElement { name: "south".into(), associated_values: vec![], annotations: None },
        ],
        members: vec![],
        is_implicit: false,
    };
    let greet = Statement::FunctionDeclaration(FunctionDecl {
        prefix: "greet".into(),
        parameters: vec![FunctionParameter {
            label: "name".into(),
            api_label: None,
            type_name: "String".into(),
            default_value: None,
        }],
        return_type: "String".into(),
        function_type: "(String) -> String".into(),
        is_implicit: false,
        is_static: false,
        is_mutating: false,
        extends_type: None,
        statements: Some(vec![Statement::ReturnStatement {
            expr: Some(swiftling_ir::Expression::DeclarationReferenceExpression {
                identifier: "name".into(),
                type_name: "String".into(),
                is_standard_library: false,
                is_implicit: false,
            }),
        }]),
        access: None,
        annotations: None,
    });
    let out = render(vec![color, greet]);
    insta::assert_snapshot!(out, @r###"
    enum class Direction {
    	North, South
    }
    fun greet(name: String): String {
    	return name
    }
    "###);
}

#[test]
fn data_class_with_extra_member() {
    let size = Statement::StructDeclaration {
        name: "Size".into(),
        inherits: vec![],
        members: vec![
            Statement::VariableDeclaration(VariableDecl {
                identifier: "width".into(),
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
            Statement::FunctionDeclaration(FunctionDecl {
                prefix: "area".into(),
                parameters: vec![],
                return_type: "Int32".into(),
                function_type: "() -> Int32".into(),
                is_implicit: false,
                is_static: false,
                is_mutating: false,
                extends_type: None,
                statements: Some(vec![Statement::ReturnStatement {
                    expr: Some(swiftling_ir::Expression::LiteralInt(0)),
                }]),
                access: None,
                annotations: None,
            }),
        ],
    };
    let out = render(vec![size]);
    insta::assert_snapshot!(out, @r###"
    data class Size(val width: Int) {
    	fun area(): Int {
    		return 0
    	}
    }
    "###);
}
