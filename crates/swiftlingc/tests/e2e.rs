//! Black-box end-to-end tests for the `swiftlingc` CLI: invoke the built
//! binary on a `.swiftASTDump` fixture and assert on the rendered Kotlin
//! it writes next to it. Mirrors the teacher's `meshc/tests/e2e.rs`, with
//! one difference: this transpiler's downstream tool is `kotlinc`, out
//! of scope for these tests (spec §1), so each case stops at the
//! rendered `.kt` text rather than compiling and running it.

use std::path::PathBuf;
use std::process::Command;

/// Helper: write a `.swiftASTDump` fixture, invoke `swiftlingc transpile`
/// on it, and return the rendered Kotlin text.
fn transpile(dump_source: &str) -> String {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let dump_path = temp_dir.path().join("Main.swiftASTDump");
    std::fs::write(&dump_path, dump_source).expect("failed to write dump fixture");

    let swiftlingc = find_swiftlingc();
    let output = Command::new(&swiftlingc)
        .args(["transpile", dump_path.to_str().unwrap()])
        .output()
        .expect("failed to invoke swiftlingc");

    assert!(
        output.status.success(),
        "swiftlingc transpile failed:\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let kt_path = dump_path.with_extension("kt");
    std::fs::read_to_string(&kt_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", kt_path.display(), e))
}

/// Helper: same as `transpile`, but also returns the subcommand's stderr
/// (where the diagnostic histogram is printed).
fn transpile_with_stderr(dump_source: &str) -> (String, String) {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let dump_path = temp_dir.path().join("Main.swiftASTDump");
    std::fs::write(&dump_path, dump_source).expect("failed to write dump fixture");

    let swiftlingc = find_swiftlingc();
    let output = Command::new(&swiftlingc)
        .args(["transpile", dump_path.to_str().unwrap()])
        .output()
        .expect("failed to invoke swiftlingc");

    let kt_path = dump_path.with_extension("kt");
    let kotlin = std::fs::read_to_string(&kt_path).unwrap_or_default();
    (kotlin, String::from_utf8_lossy(&output.stderr).to_string())
}

/// Find the `swiftlingc` binary in the target directory.
fn find_swiftlingc() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("cannot find current exe")
        .parent()
        .expect("cannot find parent dir")
        .to_path_buf();

    if path.file_name().map_or(false, |n| n == "deps") {
        path = path.parent().unwrap().to_path_buf();
    }

    let swiftlingc = path.join("swiftlingc");
    assert!(
        swiftlingc.exists(),
        "swiftlingc binary not found at {}. Run `cargo build -p swiftlingc` first.",
        swiftlingc.display()
    );
    swiftlingc
}

/// S1 (spec §8): a top-level `let x = 3` renders as `val x: Int = 3`.
#[test]
fn e2e_let_binding() {
    let dump = r#"(source_file
        (pattern_binding_decl
            (pattern_named name=x type=Int)
            (integer_literal_expr value="3"))
        (var_decl let name=x type=Int))"#;
    let kotlin = transpile(dump);
    assert_eq!(kotlin, "val x: Int = 3\n");
}

/// S2: an `if`/`return` compiles to Kotlin's `if (...) { ... }`.
#[test]
fn e2e_if_return() {
    let dump = r#"(source_file
        (top_level_code_decl
            (brace_stmt
                (if_stmt
                    (binary_expr op="<"
                        (declref_expr decl=x type=Int)
                        (integer_literal_expr value="10"))
                    (brace_stmt (return_stmt))))))"#;
    let kotlin = transpile(dump);
    assert!(kotlin.contains("if (x < 10) {\n\treturn\n}"), "got:\n{kotlin}");
}

/// S3: an array literal renders as `mutableListOf(...)`.
#[test]
fn e2e_array_literal() {
    let dump = r#"(source_file
        (top_level_code_decl
            (brace_stmt
                (expr
                    (array_expr type="[Int]"
                        (integer_literal_expr value="1")
                        (integer_literal_expr value="2")
                        (integer_literal_expr value="3"))))))"#;
    let kotlin = transpile(dump);
    assert!(kotlin.contains("mutableListOf(1, 2, 3)"), "got:\n{kotlin}");
}

/// An `import Foundation` declaration passes through unchanged.
#[test]
fn e2e_import_declaration() {
    let dump = r#"(source_file (import_decl name=Foundation))"#;
    let kotlin = transpile(dump);
    assert!(kotlin.starts_with("import Foundation"), "got:\n{kotlin}");
}

/// A malformed dump (unbalanced parens) is reported as an error and
/// `swiftlingc` exits non-zero.
#[test]
fn e2e_malformed_dump_fails() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let dump_path = temp_dir.path().join("Broken.swiftASTDump");
    std::fs::write(&dump_path, "(source_file (import_decl name=Foundation)").unwrap();

    let swiftlingc = find_swiftlingc();
    let output = Command::new(&swiftlingc)
        .args(["transpile", dump_path.to_str().unwrap()])
        .output()
        .expect("failed to invoke swiftlingc");

    assert!(!output.status.success(), "expected swiftlingc to fail on an unbalanced dump");
}

/// A translation that hits an unrecognized node shape still produces a
/// `.kt` file containing the `<<Error>>` sentinel, and reports the
/// offending node in the stderr histogram (spec §7, §4.5).
#[test]
fn e2e_unsupported_construct_yields_error_sentinel_and_histogram() {
    let dump = r#"(source_file
        (top_level_code_decl
            (brace_stmt
                (totally_unknown_expr))))"#;
    let (kotlin, stderr) = transpile_with_stderr(dump);
    assert!(kotlin.contains("<<Error>>"), "got:\n{kotlin}");
    assert!(stderr.contains("error(s)"), "got stderr:\n{stderr}");
}

/// `dump-to-ir` prints the translated IR as JSON without writing a `.kt`
/// file (spec §4.6 `irFromSwiftAst`).
#[test]
fn e2e_dump_to_ir_prints_json() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let dump_path = temp_dir.path().join("Main.swiftASTDump");
    std::fs::write(
        &dump_path,
        r#"(source_file (top_level_code_decl (brace_stmt (return_stmt (integer_literal_expr value="1")))))"#,
    )
    .unwrap();

    let swiftlingc = find_swiftlingc();
    let output = Command::new(&swiftlingc)
        .args(["dump-to-ir", dump_path.to_str().unwrap()])
        .output()
        .expect("failed to invoke swiftlingc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ReturnStatement"), "got:\n{stdout}");

    let kt_path = dump_path.with_extension("kt");
    assert!(!kt_path.exists(), "dump-to-ir should not write a .kt file");
}
