use auth::SessionSecret;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::{self};
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;

use crate::inbound::http::middleware::session_cookie;
use crate::inbound::http::middleware::SESSION_COOKIE;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;

/// Revoke the current session, clear the cookie, and send the client home.
///
/// Always answers the same way: a client without a session (or with a
/// garbage cookie) gets the identical redirect, and a storage failure is
/// logged rather than surfaced.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(secret) = session_cookie(&headers).and_then(|raw| SessionSecret::parse(raw).ok()) {
        if let Err(e) = state.session_service.logout(&secret).await {
            tracing::error!(error = %e, "Failed to revoke session");
        }
    }

    let clear_cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);

    (
        [(http::header::SET_COOKIE, clear_cookie)],
        Redirect::to("/"),
    )
        .into_response()
}
