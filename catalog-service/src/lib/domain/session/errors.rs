use thiserror::Error;

/// Top-level error for all session-related operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Unknown username, wrong password, and malformed username all collapse
    /// into this variant so callers cannot distinguish them.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    // Infrastructure errors
    #[error("Session storage did not answer in time: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for SessionError {
    fn from(err: anyhow::Error) -> Self {
        SessionError::Unknown(err.to_string())
    }
}
