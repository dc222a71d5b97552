//! The driver (spec §4.6): the four named pipeline stages plus the two
//! `Shell`-backed verbs, `compile` and `run`, that hand the emitted
//! Kotlin off to an external toolchain the same way
//! `mesh-codegen::link::link` hands object files off to `cc`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use swiftling_common::{SourceFile, TextSourceFile};
use swiftling_decoder::RawTree;
use swiftling_diag::DiagnosticSink;
use swiftling_ir::TranslationUnit;
use swiftling_kotlin::EmitContext;
use swiftling_translate::TranslationContext;

use crate::error::DriverError;
use crate::io::FileIO;
use crate::pass::PassPipeline;
use crate::shell::{CommandOutput, Shell};

/// Stage 1 (spec §4.6): decode a textual AST dump into a `RawTree`.
pub fn swift_ast_from_dump(text: &str) -> Result<RawTree, DriverError> {
    Ok(swiftling_decoder::decode(text)?)
}

/// Stage 2: lower a decoded dump into the IR.
pub fn ir_from_swift_ast(
    tree: &RawTree,
    ctx: &mut TranslationContext,
) -> Result<TranslationUnit, DriverError> {
    Ok(swiftling_translate::translate(tree, ctx)?)
}

/// Stage 3: run the registered passes over the IR twice (spec §4.6).
pub fn ir_after_passes(mut unit: TranslationUnit, pipeline: &PassPipeline) -> TranslationUnit {
    pipeline.run_twice(&mut unit);
    unit
}

/// Stage 4: render the IR as Kotlin source text.
pub fn kotlin_from_ir(unit: &TranslationUnit, ctx: &mut EmitContext) -> String {
    swiftling_kotlin::kotlin_from_ir(unit, ctx)
}

/// Ties the four stages together for one `.swiftASTDump`/`.swift` pair,
/// writing the rendered Kotlin next to it with `FileIO::change_extension`.
pub struct Driver<'a> {
    pub file_io: &'a dyn FileIO,
    pub shell: &'a dyn Shell,
    pub pipeline: PassPipeline,
    pub timeout: Option<Duration>,
}

impl<'a> Driver<'a> {
    pub fn new(file_io: &'a dyn FileIO, shell: &'a dyn Shell) -> Self {
        Self { file_io, shell, pipeline: PassPipeline::new(), timeout: None }
    }

    pub fn with_pipeline(mut self, pipeline: PassPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Translates `dump_path`, optionally resolving `// kotlin: ...`
    /// directives against `swift_source_path`, and writes the rendered
    /// Kotlin to `dump_path` with its extension changed to `kt`.
    /// Returns the path written and the translation's diagnostic sink.
    pub fn transpile_file(
        &self,
        dump_path: &Path,
        swift_source_path: Option<&Path>,
    ) -> Result<(PathBuf, DiagnosticSink), DriverError> {
        let dump_text = self.file_io.read_file(dump_path).map_err(DriverError::Io)?;
        let tree = swift_ast_from_dump(&dump_text)?;

        let source_text = match swift_source_path {
            Some(p) => Some(self.file_io.read_file(p).map_err(DriverError::Io)?),
            None => None,
        };
        let source_file: Box<dyn SourceFile> = match &source_text {
            Some(text) => Box::new(TextSourceFile::new(text)),
            None => Box::new(swiftling_common::NoComments),
        };

        let mut tctx = TranslationContext::new(source_file.as_ref());
        let unit = ir_from_swift_ast(&tree, &mut tctx)?;
        let unit = ir_after_passes(unit, &self.pipeline);

        let mut sink = tctx.sink;
        let mut ectx = EmitContext::new(&mut sink);
        let kotlin = kotlin_from_ir(&unit, &mut ectx);

        let out_path = self.file_io.change_extension(dump_path, "kt");
        self.file_io.write_file(&out_path, &kotlin).map_err(DriverError::Io)?;
        Ok((out_path, sink))
    }

    /// Invokes `kotlinc` on the rendered `.kt` files, the `Shell`-backed
    /// verb named in spec §4.6. `None` means the compiler never
    /// finished within `self.timeout` (spec §5).
    pub fn compile(&self, kotlin_paths: &[PathBuf]) -> Option<CommandOutput> {
        let mut argv = vec!["kotlinc".to_string()];
        argv.extend(kotlin_paths.iter().map(|p| p.display().to_string()));
        argv.push("-include-runtime".to_string());
        argv.push("-d".to_string());
        argv.push("out.jar".to_string());
        self.shell.run(&argv, None, self.timeout)
    }

    /// Runs a jar built by `compile` out of `folder` (spec §4.6).
    pub fn run(&self, folder: &Path) -> Option<CommandOutput> {
        let argv = vec!["java".to_string(), "-jar".to_string(), "out.jar".to_string()];
        self.shell.run(&argv, Some(folder), self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::StdFileIO;
    use crate::shell::StdShell;

    #[test]
    fn transpiles_a_minimal_dump_end_to_end() {
        let dir = std::env::temp_dir().join(format!("swiftlingc-driver-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let dump_path = dir.join("Main.swiftASTDump");
        std::fs::write(
            &dump_path,
            r#"(source_file
                (top_level_code_decl (brace_stmt (return_stmt (integer_literal_expr value="1")))))"#,
        )
        .unwrap();

        let file_io = StdFileIO;
        let shell = StdShell;
        let driver = Driver::new(&file_io, &shell);
        let (out_path, sink) = driver.transpile_file(&dump_path, None).unwrap();
        assert_eq!(out_path, dir.join("Main.kt"));
        assert!(!sink.has_errors_or_warnings());
        let kotlin = std::fs::read_to_string(&out_path).unwrap();
        assert!(kotlin.contains("fun main(args: Array<String>)"));
        assert!(kotlin.contains("return 1"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
