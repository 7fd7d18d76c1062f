use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::account::models::AccountId;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Deletion succeeds with a bodyless 204; the envelope is for payloads.
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let account_id =
        AccountId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .account_service
        .delete_account(&account_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
