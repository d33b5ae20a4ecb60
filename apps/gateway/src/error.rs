//! Gateway error taxonomy and its HTTP mapping.
//!
//! | Variant             | Status | `error` label                 |
//! |---------------------|--------|-------------------------------|
//! | `CredentialMissing` | 500    | `API key not configured`      |
//! | `Upstream`          | 500    | `Failed to fetch <noun> data` |
//! | `NotFound`          | 404    | `Not found`                   |
//! | `Internal`          | 500    | `Internal server error`       |
//!
//! Every variant renders as the shared [`ErrorEnvelope`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flightdeck_common::constants::{ENV_API_KEY, LABEL_INTERNAL, LABEL_KEY_MISSING, LABEL_NOT_FOUND};
use flightdeck_common::ErrorEnvelope;
use thiserror::Error;
use tracing::{error, warn};

use crate::clients::aviation_edge::UpstreamResource;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API key not configured")]
    CredentialMissing,

    /// `message` is already redacted.
    #[error("Failed to fetch {noun} data: {message}", noun = .resource.noun())]
    Upstream {
        resource: UpstreamResource,
        message: String,
    },

    #[error("Route {method} {path} not found")]
    NotFound { method: String, path: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::NotFound { .. } => StatusCode::NOT_FOUND,
            GatewayError::CredentialMissing
            | GatewayError::Upstream { .. }
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            GatewayError::CredentialMissing => ErrorEnvelope::new(
                LABEL_KEY_MISSING,
                format!("Please set {ENV_API_KEY} environment variable"),
            ),
            GatewayError::Upstream { resource, message } => ErrorEnvelope::new(
                format!("Failed to fetch {} data", resource.noun()),
                message.clone(),
            ),
            GatewayError::NotFound { method, path } => ErrorEnvelope::new(
                LABEL_NOT_FOUND,
                format!("Route {method} {path} not found"),
            ),
            GatewayError::Internal(message) => ErrorEnvelope::new(LABEL_INTERNAL, message.clone()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let envelope = self.envelope();
        match &self {
            GatewayError::NotFound { .. } => warn!("{}", envelope.message),
            _ => error!("Proxy error: {}: {}", envelope.error, envelope.message),
        }
        (self.status(), Json(envelope)).into_response()
    }
}
