use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::UsernameError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::UpdateAccountCommand;
use crate::account::models::Username;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<ApiSuccess<UpdateAccountResponseData>, ApiError> {
    let account_id =
        AccountId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .account_service
        .update_account(&account_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

/// HTTP request body for updating an account (raw JSON).
///
/// Absent fields are left untouched; a new password must be confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateAccountRequest {
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateAccountRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Passwords must match")]
    PasswordMismatch,
}

impl UpdateAccountRequest {
    fn try_into_command(self) -> Result<UpdateAccountCommand, ParseUpdateAccountRequestError> {
        let username = self.username.map(Username::new).transpose()?;

        let password = match self.password {
            Some(password) if self.confirm_password.as_deref() == Some(password.as_str()) => {
                // An empty password means "leave it unchanged"
                (!password.is_empty()).then_some(password)
            }
            Some(_) => return Err(ParseUpdateAccountRequestError::PasswordMismatch),
            None => None,
        };

        Ok(UpdateAccountCommand {
            username,
            first_name: self.first_name,
            last_name: self.last_name,
            password,
        })
    }
}

impl From<ParseUpdateAccountRequestError> for ApiError {
    fn from(err: ParseUpdateAccountRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateAccountResponseData {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for UpdateAccountResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            username: account.username.as_str().to_string(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role: account.role.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}
