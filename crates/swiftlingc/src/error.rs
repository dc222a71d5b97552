//! Driver-level errors (spec §7): wraps each pipeline stage's own error
//! type plus the one failure mode that belongs to the driver itself,
//! an external command that didn't succeed.

use std::fmt;

use swiftling_decoder::MalformedDump;
use swiftling_diag::FailFast;
use swiftling_translate::TranslationError;

#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    Decode(MalformedDump),
    /// Translation aborted in fail-fast mode; the sink it aborted into
    /// carries the actual diagnostic.
    Translate,
    ExternalFailure {
        command: String,
        status: i32,
        stderr: String,
    },
    Timeout {
        command: String,
    },
    Io(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Decode(e) => write!(f, "{e}"),
            DriverError::Translate => write!(f, "translation aborted, see diagnostic sink"),
            DriverError::ExternalFailure { command, status, stderr } => {
                write!(f, "'{command}' exited with status {status}: {stderr}")
            }
            DriverError::Timeout { command } => write!(f, "'{command}' timed out"),
            DriverError::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<MalformedDump> for DriverError {
    fn from(e: MalformedDump) -> Self {
        DriverError::Decode(e)
    }
}

impl From<FailFast> for DriverError {
    fn from(_: FailFast) -> Self {
        DriverError::Translate
    }
}

/// `TranslationError` never actually escapes `translate` (it's folded
/// into the sink), but the driver's call sites read more plainly with
/// this conversion available for anything built directly from one.
impl From<TranslationError> for DriverError {
    fn from(e: TranslationError) -> Self {
        DriverError::Io(e.to_string())
    }
}
