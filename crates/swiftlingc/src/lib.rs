//! Driver crate for the Swift-AST-dump to Kotlin transpiler (spec §4.6):
//! the four named pipeline stages, the `Driver` that chains them across
//! one `.swiftASTDump`/`.swift` pair, and the injected-capability traits
//! (`FileIO`, `Shell`) the CLI binary wires up to the real filesystem and
//! shell.

pub mod driver;
pub mod error;
pub mod io;
pub mod pass;
pub mod report;
pub mod shell;

pub use driver::{ir_after_passes, ir_from_swift_ast, kotlin_from_ir, swift_ast_from_dump, Driver};
pub use error::DriverError;
pub use io::{FileIO, StdFileIO};
pub use pass::{MergeAdjacentStringLiterals, Pass, PassPipeline};
pub use report::render_diagnostics;
pub use shell::{CommandOutput, Shell, StdShell};
