use swiftling_common::SourceFile;
use swiftling_decoder::RawTree;
use swiftling_diag::{Diagnostic, DiagnosticSink, FailFast, Severity};

use crate::comments::node_span;
use crate::error::{TranslationError, TranslationErrorKind};
use crate::pattern_binding::PatternBindingQueue;

/// Everything one translation needs beyond the `RawTree` being
/// translated: the diagnostic sink, the pattern-binding FIFO, and a
/// handle to the source file for resolving comment directives.
///
/// Spec §9 recommends threading a context value instead of relying on
/// process-wide state, for reentrancy; this is that context. The driver
/// still offers a process-wide default sink (`swiftling_diag::global_sink`)
/// for callers who don't construct one themselves, preserving the
/// documented default behavior end to end.
pub struct TranslationContext<'sf> {
    pub sink: DiagnosticSink,
    pub pending_bindings: PatternBindingQueue,
    pub source_file: &'sf dyn SourceFile,
}

impl<'sf> TranslationContext<'sf> {
    pub fn new(source_file: &'sf dyn SourceFile) -> Self {
        Self {
            sink: DiagnosticSink::new(),
            pending_bindings: PatternBindingQueue::new(),
            source_file,
        }
    }

    pub fn with_sink(source_file: &'sf dyn SourceFile, sink: DiagnosticSink) -> Self {
        Self {
            sink,
            pending_bindings: PatternBindingQueue::new(),
            source_file,
        }
    }

    /// Report an unexpected-AST-structure error for `tree`, from
    /// `context` (the translation function's name). Returns `Err` when
    /// fail-fast mode aborts the current translation, matching
    /// `DiagnosticSink::report_error`.
    pub fn report_unexpected_structure(
        &mut self,
        tree: &RawTree,
        context: &'static str,
        message: impl Into<String>,
    ) -> Result<(), FailFast> {
        let error = TranslationError {
            kind: TranslationErrorKind::UnexpectedAstStructure,
            message: message.into(),
            node_name: tree.name.clone(),
            context,
            offending_subtree: tree.to_string(),
        };
        self.sink.report_error(Diagnostic {
            severity: Severity::Error,
            message: error.to_string(),
            node_name: tree.name.clone(),
            span: node_span(tree),
            context: context.to_string(),
        })
    }

    /// Report an unsupported-construct error (spec §7: a syntactically
    /// valid input this translator knowingly refuses).
    pub fn report_unsupported(
        &mut self,
        tree: &RawTree,
        context: &'static str,
        message: impl Into<String>,
    ) -> Result<(), FailFast> {
        let error = TranslationError {
            kind: TranslationErrorKind::UnsupportedConstruct,
            message: message.into(),
            node_name: tree.name.clone(),
            context,
            offending_subtree: tree.to_string(),
        };
        self.sink.report_error(Diagnostic {
            severity: Severity::Error,
            message: error.to_string(),
            node_name: tree.name.clone(),
            span: node_span(tree),
            context: context.to_string(),
        })
    }
}
