//! Renders a translation's diagnostics (spec §4.5) the way
//! `snowc::report_diagnostics` renders parse/type errors: an `ariadne`
//! report with the offending `.swift` source line underlined when a
//! span and the original source text are both available, a plain
//! `node: message` line otherwise, followed by the error-taxonomy
//! histogram at teardown.

use ariadne::{Label, Report, ReportKind, Source};

use swiftling_common::LineIndex;
use swiftling_diag::{Diagnostic, DiagnosticSink, Severity};

/// Prints every diagnostic in `sink` to stderr, then the histogram.
/// Returns `true` if any errors (not just warnings) were reported.
pub fn render_diagnostics(sink: &DiagnosticSink, source_text: Option<&str>, file_name: &str) -> bool {
    let line_index = source_text.map(LineIndex::new);

    for diag in sink.errors().iter().chain(sink.warnings()) {
        render_one(diag, source_text, line_index.as_ref(), file_name);
    }

    if sink.has_errors_or_warnings() {
        eprintln!(
            "{} error(s), {} warning(s):",
            sink.errors().len(),
            sink.warnings().len()
        );
        for (node_name, count) in sink.histogram() {
            eprintln!("    {node_name}: {count}");
        }
    }

    !sink.errors().is_empty()
}

fn render_one(diag: &Diagnostic, source_text: Option<&str>, line_index: Option<&LineIndex>, file_name: &str) {
    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
    };

    if let (Some(text), Some(index), Some(span)) = (source_text, line_index, diag.span) {
        let range = index.line_byte_range(span.start_line);
        let range = range.start..index.line_byte_range(span.end_line).end.max(range.start + 1);
        let _ = Report::<std::ops::Range<usize>>::build(kind, range.clone())
            .with_message(format!("{} ({})", diag.message, diag.node_name))
            .with_label(Label::new(range).with_message(&diag.context))
            .finish()
            .eprint(Source::from(text));
        return;
    }

    let label = match diag.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    eprintln!("{file_name}: {label}: {} [{}] ({})", diag.message, diag.node_name, diag.context);
}
