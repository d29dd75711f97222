use serde_json::Value;

use super::Provider;
use crate::{
    config::{ProviderConfig, ProviderDefaults},
    error::EnrichError,
    session::SessionState,
};

pub const DEFAULTS: ProviderDefaults = ProviderDefaults {
    name: "System76",
    login_url: "https://account.system76.com/oauth/authorize",
    redeem_url: "https://account.system76.com/oauth/token",
    profile_url: "https://account.system76.com/api/settings",
    // System76 has no separate token validation call
    validate_url: None,
    scope: "profile:read",
};

const STAFF_GROUP: &str = "staff";

/// The parts of the settings payload we care about:
/// `{ "user": { "email": "...", "staff": true, ... } }`
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    email: String,
    staff: bool,
}

impl Settings {
    fn from_json(json: &Value) -> Result<Self, EnrichError> {
        let email = json
            .pointer("/user/email")
            .and_then(Value::as_str)
            .ok_or(EnrichError::Field {
                field: "user.email",
                expected: "string",
            })?;
        let staff = json
            .pointer("/user/staff")
            .and_then(Value::as_bool)
            .ok_or(EnrichError::Field {
                field: "user.staff",
                expected: "bool",
            })?;

        Ok(Self {
            email: email.to_string(),
            staff,
        })
    }
}

pub struct System76Provider {
    data: ProviderConfig,
    http_client: reqwest::Client,
}

impl System76Provider {
    pub fn new(data: ProviderConfig, http_client: reqwest::Client) -> Self {
        Self { data, http_client }
    }

    async fn fetch_settings(&self, access_token: &str) -> Result<Value, EnrichError> {
        let body = self
            .http_client
            .get(self.data.profile_url.url().clone())
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl Provider for System76Provider {
    fn data(&self) -> &ProviderConfig {
        &self.data
    }

    async fn enrich_session(&self, session: &mut SessionState) -> Result<(), EnrichError> {
        let json = self
            .fetch_settings(session.access_token.secret())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    "{} settings request to {} failed: {}",
                    self.data.name,
                    self.data.profile_url.as_str(),
                    e
                )
            })?;

        // Both fields are extracted before the session is touched
        let settings = Settings::from_json(&json)?;

        tracing::debug!(
            "{} settings: email {}, staff {}",
            self.data.name,
            settings.email,
            settings.staff
        );

        session.email = settings.email;
        // Re-enriching a session is idempotent: "staff" is only added if missing
        if settings.staff && !session.groups.iter().any(|g| g == STAFF_GROUP) {
            session.groups.push(STAFF_GROUP.to_string());
        }

        Ok(())
    }
}
