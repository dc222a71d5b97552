//! The `swiftlingc` CLI.
//!
//! Provides the `swiftlingc` command with the following subcommands:
//!
//! - `swiftlingc transpile <dump>` - Decode a `.swiftASTDump` and write
//!   the rendered Kotlin next to it.
//! - `swiftlingc dump-to-ir <dump>` - Decode and translate only, printing
//!   the IR as JSON (spec §4.6 `irFromSwiftAst`).
//! - `swiftlingc compile <kt-files>...` - Shell out to `kotlinc` on
//!   already-rendered `.kt` files (spec §4.6 `compile`).

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use swiftlingc::io::StdFileIO;
use swiftlingc::shell::StdShell;
use swiftlingc::{Driver, MergeAdjacentStringLiterals, PassPipeline};

#[derive(Parser)]
#[command(name = "swiftlingc", version, about = "Swift-AST-dump to Kotlin transpiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode, translate, and emit Kotlin for one `.swiftASTDump` file.
    Transpile {
        /// Path to the `.swiftASTDump` file.
        dump: PathBuf,

        /// Path to the original `.swift` source, used to resolve
        /// `// kotlin: ...` comment directives.
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Decode and translate a dump, printing the IR as JSON without
    /// emitting Kotlin.
    DumpToIr {
        /// Path to the `.swiftASTDump` file.
        dump: PathBuf,

        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Compile one or more rendered `.kt` files with `kotlinc`.
    Compile {
        /// Paths to `.kt` files.
        kt_files: Vec<PathBuf>,

        /// Abort if `kotlinc` hasn't finished within this many seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transpile { dump, source } => transpile(&dump, source.as_deref()),
        Commands::DumpToIr { dump, source } => dump_to_ir(&dump, source.as_deref()),
        Commands::Compile { kt_files, timeout_secs } => compile(&kt_files, timeout_secs),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

fn driver_with_default_pipeline<'a>(file_io: &'a StdFileIO, shell: &'a StdShell) -> Driver<'a> {
    let pipeline = PassPipeline::new().register(MergeAdjacentStringLiterals);
    Driver::new(file_io, shell).with_pipeline(pipeline)
}

fn transpile(dump: &std::path::Path, source: Option<&std::path::Path>) -> Result<(), String> {
    let file_io = StdFileIO;
    let shell = StdShell;
    let driver = driver_with_default_pipeline(&file_io, &shell);

    let (out_path, sink) = driver.transpile_file(dump, source).map_err(|e| e.to_string())?;
    eprintln!("  Kotlin: {}", out_path.display());

    let source_text = source.and_then(|p| std::fs::read_to_string(p).ok());
    let file_name = source.unwrap_or(dump).display().to_string();
    swiftlingc::render_diagnostics(&sink, source_text.as_deref(), &file_name);
    Ok(())
}

fn dump_to_ir(dump: &std::path::Path, source: Option<&std::path::Path>) -> Result<(), String> {
    use swiftling_common::{NoComments, SourceFile, TextSourceFile};
    use swiftling_translate::TranslationContext;

    let text = std::fs::read_to_string(dump).map_err(|e| format!("reading '{}': {e}", dump.display()))?;
    let tree = swiftlingc::swift_ast_from_dump(&text).map_err(|e| e.to_string())?;

    let source_text = match source {
        Some(p) => Some(std::fs::read_to_string(p).map_err(|e| format!("reading '{}': {e}", p.display()))?),
        None => None,
    };
    let source_file: Box<dyn SourceFile> = match &source_text {
        Some(text) => Box::new(TextSourceFile::new(text)),
        None => Box::new(NoComments),
    };

    let mut ctx = TranslationContext::new(source_file.as_ref());
    let unit = swiftlingc::ir_from_swift_ast(&tree, &mut ctx).map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(&unit).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn compile(kt_files: &[PathBuf], timeout_secs: Option<u64>) -> Result<(), String> {
    if kt_files.is_empty() {
        return Err("no .kt files given".to_string());
    }
    let file_io = StdFileIO;
    let shell = StdShell;
    let mut driver = driver_with_default_pipeline(&file_io, &shell);
    if let Some(secs) = timeout_secs {
        driver = driver.with_timeout(Duration::from_secs(secs));
    }

    match driver.compile(kt_files) {
        Some(output) if output.status == 0 => {
            eprint!("{}", output.stdout);
            Ok(())
        }
        Some(output) => Err(format!("kotlinc exited with status {}: {}", output.status, output.stderr)),
        None => Err("kotlinc timed out".to_string()),
    }
}
