//! Aviation-Edge API client: one authenticated GET per call.
//!
//! The credential is injected as the `key` query parameter. Nothing this
//! client logs or returns contains it: URLs and error causes go through
//! [`redact`] first. No retry, no timeout beyond the `reqwest` defaults.

use std::error::Error as _;

use flightdeck_common::params::{redact, upstream_url};
use flightdeck_common::{ApiKey, QueryParams};
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::error::GatewayError;

/// The upstream resources the gateway exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamResource {
    /// `GET /api/flights` → `flights`
    Flights,
    /// `GET /api/airports` → `cityDatabase`
    Airports,
}

impl UpstreamResource {
    /// Path segment under the upstream root.
    pub fn path(self) -> &'static str {
        match self {
            UpstreamResource::Flights => "flights",
            UpstreamResource::Airports => "cityDatabase",
        }
    }

    /// Singular noun for the `Failed to fetch <noun> data` label.
    pub fn noun(self) -> &'static str {
        match self {
            UpstreamResource::Flights => "flight",
            UpstreamResource::Airports => "airport",
        }
    }

    /// Plural used in log lines and upstream error messages.
    pub fn plural(self) -> &'static str {
        match self {
            UpstreamResource::Flights => "flights",
            UpstreamResource::Airports => "airports",
        }
    }
}

/// Aviation-Edge HTTP client. Exists only when a credential is configured.
#[derive(Clone)]
pub struct AviationEdgeClient {
    http: Client,
    base_url: String,
    api_key: ApiKey,
}

impl AviationEdgeClient {
    pub fn new(http: Client, base_url: &str, api_key: ApiKey) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch `resource` with the caller's parameters and return the body
    /// as untouched JSON.
    pub async fn fetch(
        &self,
        resource: UpstreamResource,
        caller: &QueryParams,
    ) -> Result<Value, GatewayError> {
        let url = upstream_url(&self.base_url, resource.path(), &self.api_key, caller)
            .map_err(|e| self.failure(resource, e.to_string()))?;

        info!(
            "Fetching {} from: {}",
            resource.plural(),
            redact(url.as_str(), &self.api_key)
        );

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.failure(resource, describe(e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(self.failure(
                resource,
                format!(
                    "Aviation-Edge API error fetching {}: {} {}",
                    resource.plural(),
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| self.failure(resource, describe(e)))?;

        match data.as_array() {
            Some(records) => info!("Received {} {} records", records.len(), resource.noun()),
            None => info!("Received non-array {} payload", resource.noun()),
        }

        Ok(data)
    }

    fn failure(&self, resource: UpstreamResource, message: String) -> GatewayError {
        GatewayError::Upstream {
            resource,
            message: redact(&message, &self.api_key),
        }
    }
}

/// Flatten a `reqwest` error and its sources into one line, URL stripped.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
