use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::Authenticator;
use auth::SessionSecret;

use crate::account::models::Account;
use crate::account::models::Username;
use crate::account::ports::AccountRepository;
use crate::session::errors::SessionError;
use crate::session::models::CreatedSession;
use crate::session::models::NewSession;
use crate::session::ports::Clock;
use crate::session::ports::SessionRepository;
use crate::session::ports::SessionServicePort;

/// Upper bound on any single store or hashing step on the session path.
///
/// A dependency that does not answer within this window is reported as
/// unavailable rather than left hanging the request.
const OPERATION_DEADLINE: Duration = Duration::from_secs(5);

/// Domain service implementation for session operations.
///
/// Concrete implementation of SessionServicePort with dependency injection.
pub struct SessionService<AR, SR, C>
where
    AR: AccountRepository,
    SR: SessionRepository,
    C: Clock,
{
    accounts: Arc<AR>,
    sessions: Arc<SR>,
    clock: Arc<C>,
    authenticator: Authenticator,
    ttl_hours: i64,
}

impl<AR, SR, C> SessionService<AR, SR, C>
where
    AR: AccountRepository,
    SR: SessionRepository,
    C: Clock,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `accounts` - Account persistence implementation
    /// * `sessions` - Session persistence implementation
    /// * `clock` - Time source for expiry decisions
    /// * `ttl_hours` - Session lifetime in hours
    ///
    /// # Returns
    /// Configured session service instance
    pub fn new(accounts: Arc<AR>, sessions: Arc<SR>, clock: Arc<C>, ttl_hours: i64) -> Self {
        Self {
            accounts,
            sessions,
            clock,
            authenticator: Authenticator::new(),
            ttl_hours,
        }
    }

    /// Bound one store or hashing step by the operation deadline.
    async fn with_deadline<T>(
        &self,
        operation: impl Future<Output = Result<T, SessionError>> + Send,
    ) -> Result<T, SessionError> {
        tokio::time::timeout(OPERATION_DEADLINE, operation)
            .await
            .map_err(|_| {
                SessionError::StorageUnavailable(format!(
                    "no answer within {}s",
                    OPERATION_DEADLINE.as_secs()
                ))
            })?
    }

    /// Verify a password against a stored hash off the async runtime.
    async fn verify_credentials(
        &self,
        password: String,
        stored_hash: String,
    ) -> Result<SessionSecret, SessionError> {
        let authenticator = self.authenticator.clone();

        let result =
            tokio::task::spawn_blocking(move || authenticator.authenticate(&password, &stored_hash))
                .await
                .map_err(|e| SessionError::Unknown(format!("Authentication task failed: {}", e)))?;

        match result {
            Ok(authenticated) => Ok(authenticated.session_secret),
            Err(auth::AuthenticationError::InvalidCredentials) => {
                Err(SessionError::InvalidCredentials)
            }
            Err(auth::AuthenticationError::PasswordError(e)) => Err(SessionError::Password(e)),
            Err(auth::AuthenticationError::TokenError(e)) => Err(SessionError::Token(e)),
        }
    }
}

#[async_trait]
impl<AR, SR, C> SessionServicePort for SessionService<AR, SR, C>
where
    AR: AccountRepository,
    SR: SessionRepository,
    C: Clock,
{
    async fn login(
        &self,
        username: Username,
        password: String,
    ) -> Result<CreatedSession, SessionError> {
        let account = self
            .with_deadline(async {
                self.accounts
                    .find_by_username(&username)
                    .await
                    .map_err(|e| SessionError::DatabaseError(e.to_string()))
            })
            .await?
            // Unknown usernames take the same path as wrong passwords
            .ok_or(SessionError::InvalidCredentials)?;

        let secret = self
            .with_deadline(self.verify_credentials(password, account.password_hash.clone()))
            .await?;

        let valid_till = self.clock.now() + chrono::Duration::hours(self.ttl_hours);

        let session = NewSession {
            account_id: account.id,
            secret: secret.clone(),
            valid_till,
        };
        self.with_deadline(self.sessions.create(session)).await?;

        Ok(CreatedSession {
            account,
            secret,
            valid_till,
        })
    }

    async fn resolve(&self, secret: &SessionSecret) -> Result<Option<Account>, SessionError> {
        let record = self
            .with_deadline(self.sessions.find_by_secret(secret))
            .await?;

        // Expiry is decided here, not in SQL: a session is live strictly
        // until its valid_till instant, measured on the injected clock.
        Ok(record
            .filter(|record| record.valid_till > self.clock.now())
            .map(|record| record.account))
    }

    async fn logout(&self, secret: &SessionSecret) -> Result<(), SessionError> {
        self.with_deadline(self.sessions.delete_by_secret(secret))
            .await?;

        Ok(())
    }

    async fn sweep_expired(&self) -> Result<u64, SessionError> {
        self.sessions.delete_expired(self.clock.now()).await
    }
}
