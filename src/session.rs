use openidconnect::{AccessToken, RefreshToken};
use serde::{Deserialize, Serialize};

/// Per-login state owned by the surrounding proxy.
///
/// Providers only ever write `email` and append to `groups`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub access_token: AccessToken,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<RefreshToken>,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub user: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub preferred_username: String,

    #[serde(default)]
    pub groups: Vec<String>,

    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,

    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<u64>,
}

impl SessionState {
    pub fn new(access_token: AccessToken) -> Self {
        Self {
            access_token,
            id_token: None,
            refresh_token: None,
            email: String::new(),
            user: String::new(),
            preferred_username: String::new(),
            groups: Vec::new(),
            created_at: None,
            expires_on: None,
        }
    }

    #[cfg(test)]
    pub fn test_value() -> Self {
        Self::new(AccessToken::new("imaginary_access_token".to_string()))
    }
}
