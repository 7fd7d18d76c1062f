use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use super::ApiError;
use crate::account::models::Username;
use crate::inbound::http::middleware::SESSION_COOKIE;
use crate::inbound::http::router::AppState;
use crate::session::errors::SessionError;
use crate::session::ports::SessionServicePort;

pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequestBody>) -> Response {
    // A malformed username fails exactly like an unknown one
    let username = match Username::new(body.username) {
        Ok(username) => username,
        Err(_) => return auth_failure(),
    };

    match state.session_service.login(username, body.password).await {
        Ok(created) => {
            let cookie = format!(
                "{}={}; Path=/; HttpOnly",
                SESSION_COOKIE,
                created.secret.as_str()
            );

            (
                StatusCode::OK,
                [(http::header::SET_COOKIE, cookie)],
                Json(LoginResponseBody {
                    username: created.account.username.as_str().to_string(),
                    session_token: created.secret.as_str().to_string(),
                }),
            )
                .into_response()
        }
        Err(SessionError::InvalidCredentials) => auth_failure(),
        Err(e) => {
            tracing::error!(error = %e, "Login failed");
            ApiError::from(e).into_response()
        }
    }
}

/// The single rejection shape for every credential problem.
fn auth_failure() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "err": "auth",
            "message": "you shall not pass!"
        })),
    )
        .into_response()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseBody {
    pub username: String,
    pub session_token: String,
}
