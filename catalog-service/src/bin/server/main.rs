use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use catalog_service::account::ports::AccountServicePort;
use catalog_service::config::Config;
use catalog_service::domain::account::service::AccountService;
use catalog_service::domain::catalog::service::CatalogService;
use catalog_service::domain::session::service::SessionService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::SqliteAccountRepository;
use catalog_service::outbound::repositories::SqliteCatalogRepository;
use catalog_service::outbound::repositories::SqliteSessionRepository;
use catalog_service::session::ports::SessionServicePort;
use catalog_service::session::ports::SystemClock;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The bootstrap admin password is config too, but never logged
    tracing::info!(
        database_location = %config.database.location,
        http_port = config.server.http_port,
        session_ttl_hours = config.session.ttl_hours,
        sweep_interval_secs = config.session.sweep_interval_secs,
        "Configuration loaded"
    );

    std::fs::create_dir_all(&config.database.location)?;
    let database_file = Path::new(&config.database.location).join("database.sqlite");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&database_file)
                .create_if_missing(true)
                .foreign_keys(true),
        )
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "sqlite",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let account_repository = Arc::new(SqliteAccountRepository::new(pool.clone()));
    let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let catalog_repository = Arc::new(SqliteCatalogRepository::new(pool));
    let clock = Arc::new(SystemClock);

    let account_service = Arc::new(AccountService::new(Arc::clone(&account_repository)));
    let session_service = Arc::new(SessionService::new(
        account_repository,
        session_repository,
        clock,
        config.session.ttl_hours,
    ));
    let catalog_service = Arc::new(CatalogService::new(catalog_repository));

    let seeded = account_service
        .ensure_admin_account(&config.bootstrap.admin_password)
        .await?;
    if seeded {
        tracing::info!(username = "admin", "Reserved admin account seeded");
    }

    let sweep_interval = Duration::from_secs(config.session.sweep_interval_secs);
    let sweeper = Arc::clone(&session_service);
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(sweep_interval).await;
            match sweeper.sweep_expired().await {
                Ok(0) => {}
                Ok(count) => tracing::info!(count, "Removed expired sessions"),
                Err(e) => tracing::error!(error = %e, "Failed to remove expired sessions"),
            }
        }
    });

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(account_service, session_service, catalog_service);
    let http_server =
        tokio::spawn(async move { axum::serve(http_listener, http_application).await });

    match tokio::try_join!(http_server) {
        Ok(_) => tracing::info!("Server exited successfully"),
        Err(e) => tracing::error!(error = %e, "Server error"),
    };

    Ok(())
}
