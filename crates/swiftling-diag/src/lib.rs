//! The diagnostic sink (spec §4.5): accumulates translator and emitter
//! errors/warnings, supports fail-fast or collect mode, and renders an
//! error-taxonomy histogram at teardown.
//!
//! The sink is process-wide shared mutable state (spec §5), matching
//! the same mutex-guarded singleton pattern the template-bootstrap pass
//! uses elsewhere in this codebase: a `Mutex` behind a `OnceLock`, so
//! concurrent translations serialize on it rather than racing.

mod sink;

pub use sink::{Diagnostic, DiagnosticSink, FailFast, Severity};

use std::sync::{Mutex, MutexGuard, OnceLock};

static GLOBAL_SINK: OnceLock<Mutex<DiagnosticSink>> = OnceLock::new();

/// The process-wide default sink, lazily initialized on first use. A
/// single translation normally owns its own `DiagnosticSink` via
/// `TranslationContext`; this global exists only for callers that use
/// the driver's simplest entry points without constructing a context
/// themselves (spec §5, §9: a design concession kept for parity with the
/// documented default behavior).
pub fn global_sink() -> MutexGuard<'static, DiagnosticSink> {
    GLOBAL_SINK
        .get_or_init(|| Mutex::new(DiagnosticSink::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
