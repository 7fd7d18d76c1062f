use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_account::create_account;
use super::handlers::delete_account::delete_account;
use super::handlers::delete_instrument::delete_instrument;
use super::handlers::get_instrument::get_instrument;
use super::handlers::get_musician::get_musician;
use super::handlers::list_accounts::list_accounts;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::update_account::update_account;
use super::handlers::whoami::whoami;
use super::middleware::require_admin;
use super::middleware::resolve_identity;
use crate::domain::account::service::AccountService;
use crate::domain::catalog::service::CatalogService;
use crate::domain::session::service::SessionService;
use crate::outbound::repositories::SqliteAccountRepository;
use crate::outbound::repositories::SqliteCatalogRepository;
use crate::outbound::repositories::SqliteSessionRepository;
use crate::session::ports::SystemClock;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<SqliteAccountRepository>>,
    pub session_service:
        Arc<SessionService<SqliteAccountRepository, SqliteSessionRepository, SystemClock>>,
    pub catalog_service: Arc<CatalogService<SqliteCatalogRepository>>,
}

pub fn create_router(
    account_service: Arc<AccountService<SqliteAccountRepository>>,
    session_service: Arc<
        SessionService<SqliteAccountRepository, SqliteSessionRepository, SystemClock>,
    >,
    catalog_service: Arc<CatalogService<SqliteCatalogRepository>>,
) -> Router {
    let state = AppState {
        account_service,
        session_service,
        catalog_service,
    };

    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/whoami", get(whoami));

    let catalog_routes = Router::new()
        .route("/api/v1/instruments/:id", get(get_instrument))
        .route("/api/v1/musicians/:id", get(get_musician));

    let admin_routes = Router::new()
        .route("/admin", get(list_accounts))
        .route("/admin/accounts", post(create_account))
        .route("/admin/accounts/:id", put(update_account))
        .route("/admin/accounts/:id", delete(delete_account))
        .route("/api/v1/instruments/:id", delete(delete_instrument))
        .route_layer(middleware::from_fn(require_admin));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // No headers in the span: the session cookie must stay out of logs
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(catalog_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_identity,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
