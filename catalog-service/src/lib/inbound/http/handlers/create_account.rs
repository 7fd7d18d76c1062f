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
use crate::account::models::CreateAccountCommand;
use crate::account::models::Username;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<ApiSuccess<CreateAccountResponseData>, ApiError> {
    state
        .account_service
        .create_account(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}

/// HTTP request body for creating an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAccountRequest {
    username: String,
    first_name: String,
    last_name: String,
    password: String,
    confirm_password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateAccountRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Passwords must match")]
    PasswordMismatch,
}

impl CreateAccountRequest {
    fn try_into_command(self) -> Result<CreateAccountCommand, ParseCreateAccountRequestError> {
        if self.first_name.is_empty() {
            return Err(ParseCreateAccountRequestError::EmptyField("first_name"));
        }
        if self.last_name.is_empty() {
            return Err(ParseCreateAccountRequestError::EmptyField("last_name"));
        }
        if self.password.is_empty() {
            return Err(ParseCreateAccountRequestError::EmptyField("password"));
        }
        if self.password != self.confirm_password {
            return Err(ParseCreateAccountRequestError::PasswordMismatch);
        }

        let username = Username::new(self.username)?;
        Ok(CreateAccountCommand::new(
            username,
            self.first_name,
            self.last_name,
            self.password,
        ))
    }
}

impl From<ParseCreateAccountRequestError> for ApiError {
    fn from(err: ParseCreateAccountRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAccountResponseData {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for CreateAccountResponseData {
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
