use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::middleware::Identity;

/// Report the calling identity, or JSON `null` for anonymous requests.
pub async fn whoami(identity: Option<Extension<Identity>>) -> Json<Option<IdentityData>> {
    Json(identity.map(|Extension(identity)| IdentityData::from(&identity)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityData {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<&Identity> for IdentityData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.account_id.0,
            username: identity.username.clone(),
            role: identity.role.as_str().to_string(),
        }
    }
}
