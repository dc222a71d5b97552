use std::fmt;

/// Unlike the translator, the Emitter never aborts (spec §4.4): an
/// unexpected IR shape is reported to the sink as a warning and the
/// renderer falls back to the `<<Error>>` sentinel or some other
/// best-effort text, so rendering always finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitWarning {
    pub message: String,
    pub node_name: String,
}

impl fmt::Display for EmitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected IR shape in {}: {}", self.node_name, self.message)
    }
}

impl std::error::Error for EmitWarning {}
