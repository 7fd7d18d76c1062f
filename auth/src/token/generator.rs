use rand::rngs::OsRng;
use rand::RngCore;

use super::errors::TokenError;
use super::secret::SessionSecret;

/// Number of random bytes backing a session secret.
const SECRET_BYTES: usize = 32;

/// Session-secret generator.
///
/// Randomness comes from the operating system CSPRNG only; 32 bytes are drawn
/// per secret and hex-encoded to 64 lowercase characters. The session store's
/// unique index is the defense-in-depth backstop against collisions, not the
/// primary guarantee.
#[derive(Clone)]
pub struct TokenGenerator;

impl TokenGenerator {
    /// Create a new generator instance.
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh session secret.
    ///
    /// # Errors
    /// * `EntropyUnavailable` - The system entropy source failed
    pub fn generate(&self) -> Result<SessionSecret, TokenError> {
        let mut bytes = [0u8; SECRET_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TokenError::EntropyUnavailable(e.to_string()))?;

        Ok(SessionSecret::from_encoded(hex::encode(bytes)))
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
