use std::sync::Arc;

use crate::{
    config::{ProviderConfig, ProviderDefaults, ProviderOverrides},
    error::EnrichError,
    session::SessionState,
};

mod system76;

pub use system76::System76Provider;

/// What every identity provider adapter can do.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    fn data(&self) -> &ProviderConfig;

    /// Fill in the session's identity attributes from the provider.
    ///
    /// On error the session is left exactly as it was passed in.
    /// Dropping the future before completion has the same effect.
    async fn enrich_session(&self, session: &mut SessionState) -> Result<(), EnrichError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    System76,
}

impl ProviderKind {
    pub fn defaults(self) -> &'static ProviderDefaults {
        match self {
            ProviderKind::System76 => &system76::DEFAULTS,
        }
    }

    pub fn build(
        self,
        overrides: ProviderOverrides,
        http_client: reqwest::Client,
    ) -> Arc<dyn Provider> {
        match self {
            ProviderKind::System76 => Arc::new(System76Provider::new(
                overrides.with_defaults(self.defaults()),
                http_client,
            )),
        }
    }
}
