use super::errors::TokenError;

/// Opaque session secret.
///
/// The secret is both session identifier and capability: possession equals
/// authentication. A well-formed secret is exactly 64 hex characters (32
/// encoded bytes). Values arriving from the outside (cookie values) go
/// through [`SessionSecret::parse`] so malformed input is rejected before
/// any store is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSecret(String);

impl SessionSecret {
    /// Encoded length of a session secret in characters.
    pub const LENGTH: usize = 64;

    /// Validate a candidate secret, typically a raw cookie value.
    ///
    /// # Errors
    /// * `WrongLength` - Candidate is not exactly 64 characters
    /// * `InvalidCharacters` - Candidate contains non-hex characters
    pub fn parse(candidate: &str) -> Result<Self, TokenError> {
        if candidate.len() != Self::LENGTH {
            return Err(TokenError::WrongLength {
                expected: Self::LENGTH,
                actual: candidate.len(),
            });
        }

        if !candidate.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TokenError::InvalidCharacters);
        }

        Ok(Self(candidate.to_string()))
    }

    /// Wrap an already-encoded secret produced by the generator.
    pub(crate) fn from_encoded(encoded: String) -> Self {
        Self(encoded)
    }

    /// Get the secret as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the secret, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}
