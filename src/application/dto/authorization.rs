use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything the consent screen needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorizationViewDto {
    pub scopes: Vec<String>,
    pub client_name: String,
    pub request_uri: String,
    pub handle: String,
}

/// Absolute URL the user agent is sent to once the request is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RedirectTarget> for String {
    fn from(value: RedirectTarget) -> Self {
        value.0
    }
}

/// An accepted request, handed out exactly once in exchange for its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorizationGrantDto {
    pub subject: String,
    pub client_id: String,
    pub scope: String,
    pub redirect_uri: String,
    pub expires_at: DateTime<Utc>,
}
