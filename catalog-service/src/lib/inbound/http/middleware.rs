use auth::SessionSecret;
use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::account::models::AccountId;
use crate::account::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;

/// Name of the cookie carrying the session secret
pub const SESSION_COOKIE: &str = "session";

/// Extension type to store the resolved account identity in request extensions
#[derive(Debug, Clone)]
pub struct Identity {
    pub account_id: AccountId,
    pub username: String,
    pub role: Role,
}

/// Pull the session cookie value out of the Cookie header, if present.
pub(crate) fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(http::header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

/// Middleware that resolves the session cookie to an account identity.
///
/// Permissive: this stage never rejects, it only annotates the request.
/// A missing cookie, a malformed secret, an expired session, and a store
/// failure (logged) all continue as anonymous; rejection is left to the
/// per-route gates.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let secret = session_cookie(req.headers()).and_then(|raw| SessionSecret::parse(raw).ok());

    if let Some(secret) = secret {
        match state.session_service.resolve(&secret).await {
            Ok(Some(account)) => {
                req.extensions_mut().insert(Identity {
                    account_id: account.id,
                    username: account.username.as_str().to_string(),
                    role: account.role,
                });
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to resolve session");
            }
        }
    }

    next.run(req).await
}

/// Middleware that rejects requests without an administrator identity.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let is_admin = req
        .extensions()
        .get::<Identity>()
        .map(|identity| identity.role == Role::Admin)
        .unwrap_or(false);

    if !is_admin {
        return Err(
            ApiError::Forbidden("Administrator privileges required".to_string()).into_response(),
        );
    }

    Ok(next.run(req).await)
}
