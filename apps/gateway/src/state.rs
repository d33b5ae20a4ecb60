//! Shared application state for the gateway.

use anyhow::Context;
use reqwest::Client;

use crate::clients::aviation_edge::AviationEdgeClient;
use crate::config::GatewayConfig;

/// Gateway state, shared across all request handlers, immutable after
/// startup.
pub struct AppState {
    pub config: GatewayConfig,
    /// `None` when no credential was configured.
    pub aviation: Option<AviationEdgeClient>,
}

impl AppState {
    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build upstream HTTP client")?;

        let aviation = config
            .api_key
            .clone()
            .map(|key| AviationEdgeClient::new(http, &config.upstream_url, key));

        Ok(Self {
            config: config.clone(),
            aviation,
        })
    }

    /// Whether the forwarding routes can reach upstream.
    pub fn credential_configured(&self) -> bool {
        self.aviation.is_some()
    }
}
