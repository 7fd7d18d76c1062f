//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services that keep
//! their sessions server-side:
//! - Password hashing (Argon2id)
//! - Opaque session-secret generation and parsing
//! - Authentication coordination (verify a password, issue a secret)
//!
//! Each service defines its own authentication traits and adapts these
//! implementations. The library holds no state and performs no I/O; session
//! persistence belongs to the consuming service.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Secrets
//! ```
//! use auth::{SessionSecret, TokenGenerator};
//!
//! let generator = TokenGenerator::new();
//! let secret = generator.generate().unwrap();
//! assert_eq!(secret.as_str().len(), 64);
//!
//! // Incoming cookie values are validated before any store lookup
//! let parsed = SessionSecret::parse(secret.as_str()).unwrap();
//! assert_eq!(parsed, secret);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new();
//!
//! // Provision: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue an opaque session secret
//! let result = auth.authenticate("password123", &hash).unwrap();
//! assert_eq!(result.session_secret.as_str().len(), 64);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionSecret;
pub use token::TokenError;
pub use token::TokenGenerator;
