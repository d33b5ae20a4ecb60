//! Gateway configuration, read once at startup from the environment.

use anyhow::{Context, Result};
use flightdeck_common::constants::{
    DEFAULT_PORT, ENV_API_KEY, ENV_PORT, ENV_UPSTREAM_URL, UPSTREAM_BASE_URL,
};
use flightdeck_common::ApiKey;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listening port (`PORT`, default 3001).
    pub port: u16,
    /// Aviation-Edge credential (`AVIATION_EDGE_API_KEY`). Missing is not
    /// fatal: the forwarding routes report it per request.
    pub api_key: Option<ApiKey>,
    /// Upstream root (`AVIATION_EDGE_BASE_URL`), defaults to Aviation-Edge.
    pub upstream_url: String,
}

impl GatewayConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup(ENV_PORT).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid {ENV_PORT} value: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let api_key = lookup(ENV_API_KEY).and_then(ApiKey::new);

        let upstream_url = lookup(ENV_UPSTREAM_URL)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| UPSTREAM_BASE_URL.to_string());

        Ok(Self {
            port,
            api_key,
            upstream_url,
        })
    }
}
