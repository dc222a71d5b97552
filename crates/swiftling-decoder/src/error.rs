use std::fmt;

/// The decoder's single error kind (spec §7: `MalformedDump`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDump {
    pub message: String,
    /// Byte offset into the dump text where the problem was found.
    pub at: u32,
}

impl MalformedDump {
    pub fn new(message: impl Into<String>, at: u32) -> Self {
        Self {
            message: message.into(),
            at,
        }
    }
}

impl fmt::Display for MalformedDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed AST dump at byte {}: {}", self.at, self.message)
    }
}

impl std::error::Error for MalformedDump {}
