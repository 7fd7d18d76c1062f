use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiSuccess;
use super::FetchError;
use crate::catalog::models::EntityId;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_instrument(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, FetchError> {
    let id = EntityId::from_string(&id).map_err(|_| FetchError::InvalidId)?;

    state
        .catalog_service
        .delete_instrument(&id)
        .await
        .map_err(FetchError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
