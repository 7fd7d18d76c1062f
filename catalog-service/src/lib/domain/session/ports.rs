use async_trait::async_trait;
use auth::SessionSecret;
use chrono::DateTime;
use chrono::Utc;

use crate::account::models::Account;
use crate::account::models::Username;
use crate::session::errors::SessionError;
use crate::session::models::CreatedSession;
use crate::session::models::NewSession;
use crate::session::models::SessionRecord;

/// Source of the current time for expiry decisions.
///
/// Injected so tests can pin the clock to an exact instant.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Port for session domain service operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify credentials and open a new session.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password to verify
    ///
    /// # Returns
    /// Created session with its secret and expiry
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `StorageUnavailable` - A store or hashing step missed its deadline
    /// * `DatabaseError` - Database operation failed
    async fn login(
        &self,
        username: Username,
        password: String,
    ) -> Result<CreatedSession, SessionError>;

    /// Resolve a session secret to the account that owns it.
    ///
    /// Unknown and expired secrets both resolve to `None`; only
    /// infrastructure failures surface as errors.
    ///
    /// # Arguments
    /// * `secret` - Well-formed session secret
    ///
    /// # Returns
    /// Owning account, or None for unknown/expired sessions
    ///
    /// # Errors
    /// * `StorageUnavailable` - Session store missed its deadline
    /// * `DatabaseError` - Database operation failed
    async fn resolve(&self, secret: &SessionSecret) -> Result<Option<Account>, SessionError>;

    /// Revoke the session bound to a secret.
    ///
    /// Idempotent: revoking a secret with no session is a success.
    ///
    /// # Arguments
    /// * `secret` - Session secret to revoke
    ///
    /// # Errors
    /// * `StorageUnavailable` - Session store missed its deadline
    /// * `DatabaseError` - Database operation failed
    async fn logout(&self, secret: &SessionSecret) -> Result<(), SessionError>;

    /// Remove sessions whose expiry has passed.
    ///
    /// Housekeeping only: resolution already ignores expired rows, this
    /// merely keeps the table from growing without bound.
    ///
    /// # Returns
    /// Number of rows removed
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn sweep_expired(&self) -> Result<u64, SessionError>;
}

/// Persistence operations for sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Persist a new session row.
    ///
    /// # Arguments
    /// * `session` - Session fields to insert
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, session: NewSession) -> Result<(), SessionError>;

    /// Load a session and its owning account by secret.
    ///
    /// Returns the row regardless of expiry; the caller decides validity.
    ///
    /// # Arguments
    /// * `secret` - Session secret to look up
    ///
    /// # Returns
    /// Optional session record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_secret(
        &self,
        secret: &SessionSecret,
    ) -> Result<Option<SessionRecord>, SessionError>;

    /// Delete the session row bound to a secret.
    ///
    /// # Arguments
    /// * `secret` - Session secret to delete
    ///
    /// # Returns
    /// Whether a row was deleted
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_secret(&self, secret: &SessionSecret) -> Result<bool, SessionError>;

    /// Delete all sessions that expired at or before the given instant.
    ///
    /// # Arguments
    /// * `now` - Expiry cutoff
    ///
    /// # Returns
    /// Number of rows deleted
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, SessionError>;
}
