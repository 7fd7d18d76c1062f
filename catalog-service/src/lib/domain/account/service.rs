use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::CreateAccountCommand;
use crate::account::models::NewAccount;
use crate::account::models::Role;
use crate::account::models::UpdateAccountCommand;
use crate::account::models::ADMIN_ACCOUNT_ID;
use crate::account::models::ADMIN_USERNAME;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    ///
    /// # Returns
    /// Configured account service instance
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Hash a password off the async runtime.
    ///
    /// Argon2 burns tens of milliseconds of CPU, so the work is moved to the
    /// blocking pool instead of stalling the request executor.
    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(AccountError::from)
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self.hash_password(command.password).await?;

        let account = NewAccount {
            username: command.username,
            first_name: command.first_name,
            last_name: command.last_name,
            password_hash,
            role: Role::User,
            created_at: Utc::now(),
        };

        self.repository.create(account).await
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.repository.list_all().await
    }

    async fn update_account(
        &self,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError> {
        let mut account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))?;

        if let Some(new_username) = command.username {
            account.username = new_username;
        }

        if let Some(new_first_name) = command.first_name {
            account.first_name = new_first_name;
        }

        if let Some(new_last_name) = command.last_name {
            account.last_name = new_last_name;
        }

        if let Some(new_password) = command.password {
            account.password_hash = self.hash_password(new_password).await?;
        }

        self.repository.update(account).await
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError> {
        // Refused outright, before storage is consulted
        if *id == ADMIN_ACCOUNT_ID {
            return Err(AccountError::ReservedAccount(id.to_string()));
        }

        self.repository.delete(id).await
    }

    async fn ensure_admin_account(&self, password: &str) -> Result<bool, AccountError> {
        let password_hash = self.hash_password(password.to_string()).await?;

        self.repository
            .seed_admin(ADMIN_USERNAME, &password_hash, Utc::now())
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::account::models::Username;

    // Define mocks in the test module using mockall
    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;
            async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AccountError>;
            async fn list_all(&self) -> Result<Vec<Account>, AccountError>;
            async fn update(&self, account: Account) -> Result<Account, AccountError>;
            async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
            async fn seed_admin(
                &self,
                username: &str,
                password_hash: &str,
                created_at: DateTime<Utc>,
            ) -> Result<bool, AccountError>;
        }
    }

    fn account_with_id(id: i64, username: &str) -> Account {
        Account {
            id: AccountId(id),
            username: Username::new(username.to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "Account".to_string(),
            password_hash: "$argon2id$test_hash".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_account_hashes_password_and_defaults_to_user_role() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_create()
            .withf(|account| {
                account.username.as_str() == "alice"
                    && account.role == Role::User
                    && account.password_hash.starts_with("$argon2")
                    && account.password_hash != "secret123"
            })
            .times(1)
            .returning(|account| {
                Ok(Account {
                    id: AccountId(1),
                    username: account.username,
                    first_name: account.first_name,
                    last_name: account.last_name,
                    password_hash: account.password_hash,
                    role: account.role,
                    created_at: account.created_at,
                })
            });

        let service = AccountService::new(Arc::new(repository));

        let command = CreateAccountCommand {
            username: Username::new("alice".to_string()).unwrap(),
            first_name: "Alice".to_string(),
            last_name: "Coltrane".to_string(),
            password: "secret123".to_string(),
        };

        let account = service.create_account(command).await.unwrap();
        assert_eq!(account.id, AccountId(1));
        assert_eq!(account.username.as_str(), "alice");
        // Password is hashed with real Argon2
        assert!(account.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_account_duplicate_username() {
        let mut repository = MockTestAccountRepository::new();

        repository.expect_create().times(1).returning(|account| {
            Err(AccountError::UsernameAlreadyExists(
                account.username.as_str().to_string(),
            ))
        });

        let service = AccountService::new(Arc::new(repository));

        let command = CreateAccountCommand {
            username: Username::new("alice".to_string()).unwrap(),
            first_name: "Alice".to_string(),
            last_name: "Coltrane".to_string(),
            password: "secret123".to_string(),
        };

        let result = service.create_account(command).await;
        assert!(matches!(
            result.unwrap_err(),
            AccountError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_account_not_found() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository));

        let result = service.get_account(&AccountId(99)).await;
        assert!(matches!(result.unwrap_err(), AccountError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_account_rehashes_provided_password() {
        let mut repository = MockTestAccountRepository::new();

        let existing = account_with_id(7, "carol");
        let old_hash = existing.password_hash.clone();

        repository
            .expect_find_by_id()
            .withf(|id| *id == AccountId(7))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(move |account| {
                account.first_name == "Caroline"
                    && account.password_hash != old_hash
                    && account.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|account| Ok(account));

        let service = AccountService::new(Arc::new(repository));

        let command = UpdateAccountCommand {
            username: None,
            first_name: Some("Caroline".to_string()),
            last_name: None,
            password: Some("new_password".to_string()),
        };

        let updated = service.update_account(&AccountId(7), command).await.unwrap();
        assert_eq!(updated.first_name, "Caroline");
    }

    #[tokio::test]
    async fn test_update_account_not_found() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository));

        let command = UpdateAccountCommand {
            username: None,
            first_name: Some("Nobody".to_string()),
            last_name: None,
            password: None,
        };

        let result = service.update_account(&AccountId(99), command).await;
        assert!(matches!(result.unwrap_err(), AccountError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_reserved_admin_account_is_refused() {
        let mut repository = MockTestAccountRepository::new();

        // Storage must never be reached for the reserved account
        repository.expect_delete().times(0);

        let service = AccountService::new(Arc::new(repository));

        let result = service.delete_account(&ADMIN_ACCOUNT_ID).await;
        assert!(matches!(
            result.unwrap_err(),
            AccountError::ReservedAccount(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_regular_account() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_delete()
            .withf(|id| *id == AccountId(3))
            .times(1)
            .returning(|_| Ok(()));

        let service = AccountService::new(Arc::new(repository));

        assert!(service.delete_account(&AccountId(3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_admin_account_seeds_hashed_credentials() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_seed_admin()
            .withf(|username, password_hash, _created_at| {
                username == ADMIN_USERNAME && password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let service = AccountService::new(Arc::new(repository));

        let seeded = service.ensure_admin_account("bootstrap-pw").await.unwrap();
        assert!(seeded);
    }

    #[tokio::test]
    async fn test_ensure_admin_account_is_idempotent() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_seed_admin()
            .times(1)
            .returning(|_, _, _| Ok(false));

        let service = AccountService::new(Arc::new(repository));

        let seeded = service.ensure_admin_account("bootstrap-pw").await.unwrap();
        assert!(!seeded);
    }
}
