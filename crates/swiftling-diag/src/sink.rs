use rustc_hash::FxHashMap;
use swiftling_common::Span;

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single reported diagnostic (spec §4.5, §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// The offending `RawTree`'s `name` (translator diagnostics) or the
    /// offending IR node's variant name (emitter diagnostics); used to
    /// group the teardown histogram (spec §4.5).
    pub node_name: String,
    pub span: Option<Span>,
    pub context: String,
}

/// Sentinel returned by `report_error` when fail-fast mode aborts the
/// current translation. Carries no data: the diagnostic itself is
/// already recorded in the sink before this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailFast;

/// Accumulates errors and warnings across a translation (spec §4.5).
///
/// `shouldStopAtFirstError` and `shouldAvoidUnicodeCharacters` are
/// configuration flags set once before a translation begins and read
/// for its whole duration. Reporting an error in fail-fast mode returns
/// `Err(FailFast)`, which the caller propagates to abort translation
/// (spec §7); collect mode always returns `Ok(())`.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    should_stop_at_first_error: bool,
    should_avoid_unicode_characters: bool,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.should_stop_at_first_error = fail_fast;
        self
    }

    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.should_avoid_unicode_characters = ascii_only;
        self
    }

    pub fn should_stop_at_first_error(&self) -> bool {
        self.should_stop_at_first_error
    }

    pub fn should_avoid_unicode_characters(&self) -> bool {
        self.should_avoid_unicode_characters
    }

    /// Report an error. Returns `Err(FailFast)` when fail-fast mode is on,
    /// signaling the caller to abort the current translation immediately.
    pub fn report_error(&mut self, diagnostic: Diagnostic) -> Result<(), FailFast> {
        let stop = self.should_stop_at_first_error;
        self.errors.push(diagnostic);
        if stop {
            Err(FailFast)
        } else {
            Ok(())
        }
    }

    /// Report a warning. Never aborts (spec §4.5).
    pub fn report_warning(&mut self, diagnostic: Diagnostic) {
        self.warnings.push(diagnostic);
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Testable property 7 (spec §8).
    pub fn has_errors_or_warnings(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    /// Error-taxonomy histogram grouped by offending node name, sorted by
    /// descending count (spec §4.5), combining errors and warnings.
    pub fn histogram(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for diag in self.errors.iter().chain(self.warnings.iter()) {
            *counts.entry(diag.node_name.clone()).or_insert(0) += 1;
        }
        let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }
}
