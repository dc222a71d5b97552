use std::fmt;

/// Translator error kinds (spec §7): either the shape of a `RawTree`
/// didn't match what its `name` promised, or the construct is one this
/// translator knowingly refuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationErrorKind {
    UnexpectedAstStructure,
    UnsupportedConstruct,
}

/// A translator diagnostic: the kind, a human message, the offending
/// `RawTree`'s node name (for the sink's histogram), and the
/// file/line/function context the translation function was running in
/// (spec §4.2: "diagnostics include file/line/function context").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationError {
    pub kind: TranslationErrorKind,
    pub message: String,
    pub node_name: String,
    pub context: &'static str,
    pub offending_subtree: String,
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {}: {} -- {}",
            match self.kind {
                TranslationErrorKind::UnexpectedAstStructure => "unexpected AST structure",
                TranslationErrorKind::UnsupportedConstruct => "unsupported construct",
            },
            self.context,
            self.message,
            self.offending_subtree
        )
    }
}

impl std::error::Error for TranslationError {}
