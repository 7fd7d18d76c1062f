use std::str::FromStr;

use async_trait::async_trait;
use auth::SessionSecret;
use chrono::DateTime;
use chrono::Utc;
use sqlx::prelude::FromRow;
use sqlx::SqlitePool;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::Role;
use crate::account::models::Username;
use crate::session::errors::SessionError;
use crate::session::models::NewSession;
use crate::session::models::SessionRecord;
use crate::session::ports::SessionRepository;

pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Session row joined with its owning account
#[derive(Debug, FromRow)]
struct SessionAccountRow {
    id: i64,
    username: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    valid_till: DateTime<Utc>,
}

impl TryFrom<SessionAccountRow> for SessionRecord {
    type Error = AccountError;

    fn try_from(row: SessionAccountRow) -> Result<Self, Self::Error> {
        Ok(SessionRecord {
            account: Account {
                id: AccountId(row.id),
                username: Username::new(row.username)?,
                first_name: row.first_name,
                last_name: row.last_name,
                password_hash: row.password_hash,
                role: Role::from_str(&row.role)?,
                created_at: row.created_at,
            },
            valid_till: row.valid_till,
        })
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn create(&self, session: NewSession) -> Result<(), SessionError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (account_id, secret, valid_till)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(session.account_id.0)
        .bind(session.secret.as_str())
        .bind(session.valid_till)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_secret(
        &self,
        secret: &SessionSecret,
    ) -> Result<Option<SessionRecord>, SessionError> {
        // Expiry is deliberately not filtered here; the service decides
        let row = sqlx::query_as::<_, SessionAccountRow>(
            r#"
            SELECT a.id, a.username, a.first_name, a.last_name,
                   a.password_hash, a.role, a.created_at, s.valid_till
            FROM sessions s
            JOIN accounts a ON a.id = s.account_id
            WHERE s.secret = ?1
            "#,
        )
        .bind(secret.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        row.map(SessionRecord::try_from)
            .transpose()
            .map_err(|e| SessionError::DatabaseError(e.to_string()))
    }

    async fn delete_by_secret(&self, secret: &SessionSecret) -> Result<bool, SessionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE secret = ?1
            "#,
        )
        .bind(secret.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, SessionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE valid_till <= ?1
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
