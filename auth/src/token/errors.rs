use thiserror::Error;

/// Error type for session-secret operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to read from the system entropy source: {0}")]
    EntropyUnavailable(String),

    #[error("Session secret has wrong length: expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Session secret contains non-hexadecimal characters")]
    InvalidCharacters,
}
