use auth::SessionSecret;
use chrono::DateTime;
use chrono::Utc;

use crate::account::models::Account;
use crate::account::models::AccountId;

/// Session fields for a row that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub account_id: AccountId,
    pub secret: SessionSecret,
    pub valid_till: DateTime<Utc>,
}

/// Session row joined with its owning account, as loaded from storage.
///
/// Expiry is not evaluated by storage; the service compares `valid_till`
/// against its clock so the cutoff is an in-process decision.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub account: Account,
    pub valid_till: DateTime<Utc>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct CreatedSession {
    pub account: Account,
    pub secret: SessionSecret,
    pub valid_till: DateTime<Utc>,
}
