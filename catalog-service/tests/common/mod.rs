use std::sync::Arc;

use catalog_service::account::ports::AccountServicePort;
use catalog_service::domain::account::service::AccountService;
use catalog_service::domain::catalog::service::CatalogService;
use catalog_service::domain::session::service::SessionService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::SqliteAccountRepository;
use catalog_service::outbound::repositories::SqliteCatalogRepository;
use catalog_service::outbound::repositories::SqliteSessionRepository;
use catalog_service::session::ports::SystemClock;
use chrono::DateTime;
use chrono::Utc;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Password the reserved admin account is seeded with in tests.
pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // One connection, never recycled: recycling an in-memory SQLite
        // connection would throw the database away mid-test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(
                SqliteConnectOptions::new()
                    .in_memory(true)
                    .foreign_keys(true),
            )
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let account_repository = Arc::new(SqliteAccountRepository::new(pool.clone()));
        let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
        let catalog_repository = Arc::new(SqliteCatalogRepository::new(pool.clone()));

        let account_service = Arc::new(AccountService::new(Arc::clone(&account_repository)));
        let session_service = Arc::new(SessionService::new(
            account_repository,
            session_repository,
            Arc::new(SystemClock),
            24,
        ));
        let catalog_service = Arc::new(CatalogService::new(catalog_repository));

        account_service
            .ensure_admin_account(ADMIN_PASSWORD)
            .await
            .expect("Failed to seed admin account");

        let router = create_router(account_service, session_service, catalog_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            pool,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Log in through the HTTP surface; the client keeps the session cookie.
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in as the seeded admin account.
    pub async fn login_as_admin(&self) -> reqwest::Response {
        self.login("admin", ADMIN_PASSWORD).await
    }

    /// Insert a regular account directly, bypassing the admin-only route.
    pub async fn create_account(&self, username: &str, password: &str) -> i64 {
        let password_hash = auth::PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");

        let row: (i64,) = sqlx::query_as(
            "INSERT INTO accounts (username, first_name, last_name, password_hash, role, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id",
        )
        .bind(username)
        .bind("Test")
        .bind("Account")
        .bind(password_hash)
        .bind("user")
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert account");

        row.0
    }

    /// Insert a session row directly, with an arbitrary expiry.
    pub async fn insert_session(&self, account_id: i64, secret: &str, valid_till: DateTime<Utc>) {
        sqlx::query("INSERT INTO sessions (account_id, secret, valid_till) VALUES (?1, ?2, ?3)")
            .bind(account_id)
            .bind(secret)
            .bind(valid_till)
            .execute(&self.pool)
            .await
            .expect("Failed to insert session");
    }

    /// Insert an instrument row and return its id.
    pub async fn insert_instrument(&self, name: &str, description: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO instruments (name, description, origin_date, image_uri)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id",
        )
        .bind(name)
        .bind(description)
        .bind("1700")
        .bind(Option::<String>::None)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert instrument");

        row.0
    }

    /// Insert a musician row and return its id.
    pub async fn insert_musician(&self, name: &str, nationality: &str, description: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO musicians (name, nationality, description)
             VALUES (?1, ?2, ?3)
             RETURNING id",
        )
        .bind(name)
        .bind(nationality)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert musician");

        row.0
    }
}
