use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::SessionSecret;
use crate::token::TokenError;
use crate::token::TokenGenerator;

/// Authentication coordinator combining password verification and session
/// secret issuance.
///
/// Stateless: verifying a password against a stored hash and drawing a fresh
/// opaque secret are pure operations. Persisting the issued secret is the
/// caller's concern.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_generator: TokenGenerator,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Freshly issued opaque session secret
    pub session_secret: SessionSecret,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_generator: TokenGenerator::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session secret.
    ///
    /// A wrong password and a corrupt stored hash are different failures:
    /// the former is `InvalidCredentials`, the latter surfaces the
    /// underlying `PasswordError`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be processed
    /// * `TokenError` - Secret generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let session_secret = self.token_generator.generate()?;

        Ok(AuthenticationResult { session_secret })
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}
