//! Flightdeck API client: used by the CLI (and any other UI layer) to reach
//! Aviation-Edge data through the Flightdeck gateway.
//!
//! The client never talks to the upstream API and never sees its key. It
//! knows one thing: the gateway base URL (e.g. `http://localhost:3001/api`).

use std::error::Error as _;
use std::sync::OnceLock;

use anyhow::Result;
use flightdeck_common::constants::{DEFAULT_PROXY_URL, ENV_PROXY_URL};
use flightdeck_common::{ErrorEnvelope, QueryParams};
use flightdeck_types::output::HealthOutput;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{ClientError, ClientResult};

/// Lightweight client for calling the Flightdeck gateway.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

static SHARED: OnceLock<ApiClient> = OnceLock::new();

impl ApiClient {
    /// Create a client for the gateway at `base_url`.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        url::Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::with_base_url(trimmed))
    }

    /// Create from the CLI config file, honouring `FLIGHTDECK_PROXY_URL`.
    pub fn from_config() -> Result<Self> {
        let config = crate::workspace::load_config()?
            .with_proxy_override(std::env::var(ENV_PROXY_URL).ok());
        Ok(Self::new(&config.proxy.url)?)
    }

    /// Process-wide instance, created on first use through
    /// [`from_config`](Self::from_config).
    ///
    /// A config that cannot be loaded or names an invalid URL falls back to
    /// `http://localhost:3001/api`.
    pub fn shared() -> &'static ApiClient {
        SHARED.get_or_init(|| Self::resolve(Self::from_config()))
    }

    fn resolve(configured: Result<Self>) -> Self {
        configured.unwrap_or_else(|e| {
            warn!("falling back to {DEFAULT_PROXY_URL}: {e:#}");
            Self::with_base_url(DEFAULT_PROXY_URL)
        })
    }

    fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Search operations ───────────────────────────────────────

    /// `GET /flights` with arbitrary filters.
    pub async fn search_flights(&self, params: &QueryParams) -> ClientResult<Value> {
        self.request("/flights", params).await
    }

    /// `GET /airports` with arbitrary filters.
    pub async fn get_airports(&self, params: &QueryParams) -> ClientResult<Value> {
        self.request("/airports", params).await
    }

    /// Flights by IATA designator, e.g. `AA100`.
    pub async fn get_flight_by_number(&self, flight_iata: &str) -> ClientResult<Value> {
        let params = QueryParams::new().with("flight_iata", Some(flight_iata));
        self.search_flights(&params).await
    }

    /// Flights between two airports.
    pub async fn get_flights_by_route(&self, departure: &str, arrival: &str) -> ClientResult<Value> {
        let params = QueryParams::new()
            .with("dep_iata", Some(departure))
            .with("arr_iata", Some(arrival));
        self.search_flights(&params).await
    }

    /// Flights operated by one airline.
    pub async fn get_flights_by_airline(&self, airline_iata: &str) -> ClientResult<Value> {
        let params = QueryParams::new().with("airline_iata", Some(airline_iata));
        self.search_flights(&params).await
    }

    /// Gateway liveness. The health route sits at the origin, outside `/api`.
    pub async fn health(&self) -> ClientResult<HealthOutput> {
        let origin = self.base_url.strip_suffix("/api").unwrap_or(&self.base_url);
        let url = format!("{origin}/health");
        let value = self.get_json(&url, &QueryParams::new()).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // ── Transport ───────────────────────────────────────────────

    async fn request(&self, endpoint: &str, params: &QueryParams) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.get_json(&url, params).await
    }

    async fn get_json(&self, url: &str, params: &QueryParams) -> ClientResult<Value> {
        let result = self.send(url, params).await;
        if let Err(e) = &result {
            error!("API request error: {e}");
        }
        result
    }

    async fn send(&self, url: &str, params: &QueryParams) -> ClientResult<Value> {
        let query: Vec<(&str, &str)> = params.non_empty().collect();
        debug!("GET {url} ({} params)", query.len());

        let resp = self
            .http
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ClientError::Transport(describe(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            // An unreadable body only costs us the detailed message.
            let body = resp.bytes().await.unwrap_or_default();
            let message = ErrorEnvelope::recover_message(&body).unwrap_or_else(|| {
                format!(
                    "API request failed: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(describe(&e)))?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// One line: the error plus its source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
