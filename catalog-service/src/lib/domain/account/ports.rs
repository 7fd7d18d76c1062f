use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::CreateAccountCommand;
use crate::account::models::NewAccount;
use crate::account::models::UpdateAccountCommand;
use crate::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Create new account with a hashed password.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, names, and password
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError>;

    /// Retrieve account by unique identifier.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Returns
    /// Account entity
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError>;

    /// Retrieve all registered accounts.
    ///
    /// # Returns
    /// Vector of accounts
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError>;

    /// Update existing account with optional fields.
    ///
    /// A provided password is re-hashed before storage.
    ///
    /// # Arguments
    /// * `id` - Account ID to update
    /// * `command` - Command with optional username, name, and password fields
    ///
    /// # Returns
    /// Updated account entity
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn update_account(
        &self,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError>;

    /// Delete existing account.
    ///
    /// The reserved administrator account is refused before storage is
    /// consulted.
    ///
    /// # Arguments
    /// * `id` - Account ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `ReservedAccount` - Account is the reserved administrator
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError>;

    /// Seed the reserved administrator account if it does not exist yet.
    ///
    /// # Arguments
    /// * `password` - Plain text password for the seeded account
    ///
    /// # Returns
    /// Whether a new account row was created
    ///
    /// # Errors
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn ensure_admin_account(&self, password: &str) -> Result<bool, AccountError>;
}

/// Persistence operations for account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist new account to storage.
    ///
    /// # Arguments
    /// * `account` - Account fields to insert; the ID is storage-assigned
    ///
    /// # Returns
    /// Created account entity with assigned ID
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Retrieve account by identifier.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve account by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;

    /// Retrieve all accounts from storage.
    ///
    /// # Returns
    /// Vector of all accounts
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;

    /// Update existing account in storage.
    ///
    /// # Arguments
    /// * `account` - Account entity with updated fields
    ///
    /// # Returns
    /// Updated account entity
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, account: Account) -> Result<Account, AccountError>;

    /// Remove account from storage.
    ///
    /// # Arguments
    /// * `id` - Account ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;

    /// Insert the reserved administrator row if absent.
    ///
    /// Idempotent: an existing row (same ID or username) is left untouched.
    ///
    /// # Arguments
    /// * `username` - Administrator username
    /// * `password_hash` - Hashed password for the new row
    /// * `created_at` - Creation timestamp for the new row
    ///
    /// # Returns
    /// Whether a new row was inserted
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn seed_admin(
        &self,
        username: &str,
        password_hash: &str,
        created_at: DateTime<Utc>,
    ) -> Result<bool, AccountError>;
}
