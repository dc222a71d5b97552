use swiftling_diag::{Diagnostic, DiagnosticSink, Severity};

use crate::registry::{EnumRegistry, FunctionTranslationRegistry};

/// Carries the Emitter's lookup tables and its diagnostic sink through
/// one `kotlin_from_ir` call (spec §4.4, §4.5).
pub struct EmitContext<'a> {
    pub sink: &'a mut DiagnosticSink,
    pub enums: EnumRegistry,
    pub functions: FunctionTranslationRegistry,
}

impl<'a> EmitContext<'a> {
    pub fn new(sink: &'a mut DiagnosticSink) -> Self {
        Self { sink, enums: EnumRegistry::new(), functions: FunctionTranslationRegistry::new() }
    }

    /// Records a warning and keeps rendering. Unlike the translator, the
    /// Emitter never propagates a `FailFast`: it always produces output,
    /// falling back to the `<<Error>>` sentinel where the IR didn't
    /// shape up the way a variant's rendering rule expects.
    pub fn warn_unexpected_shape(&mut self, node_name: impl Into<String>, message: impl Into<String>) {
        self.sink.report_warning(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            node_name: node_name.into(),
            span: None,
            context: "emitter".to_string(),
        });
    }
}
