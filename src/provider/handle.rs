use super::client::{GeminiClient, ProviderClient};
use crate::{
    Error, Result,
    config::{MODEL, ProviderConfig},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Process-wide provider client, built once at startup and never replaced.
///
/// When no credential is configured the handle stays empty and every
/// generation attempt fails with [`Error::NotConfigured`] before touching
/// the network.
#[derive(Clone, Default)]
pub struct ProviderHandle {
    client: Option<Arc<dyn ProviderClient>>,
}

impl ProviderHandle {
    pub fn from_config(config: &ProviderConfig) -> Self {
        match &config.api_key {
            Some(api_key) => {
                info!("Provider client initialized for model {}", MODEL);
                Self::with_client(Arc::new(GeminiClient::new(api_key.clone(), config, MODEL)))
            }
            None => {
                warn!("API_KEY is not set; generation requests will be rejected");
                Self::unconfigured()
            }
        }
    }

    pub fn with_client(client: Arc<dyn ProviderClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn client(&self) -> Result<&Arc<dyn ProviderClient>> {
        self.client.as_ref().ok_or(Error::NotConfigured)
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("model", &self.client.as_ref().map(|c| c.model().to_string()))
            .finish()
    }
}
