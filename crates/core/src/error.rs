//! Errors surfaced by [`ApiClient`](crate::client::ApiClient).
//!
//! `Display` is the human-readable message the UI shows as-is. For gateway
//! failures that is the envelope's `message`, or a generic
//! `API request failed: <code> <reason>` when the body is unreadable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Gateway answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Gateway unreachable or the connection broke mid-response.
    #[error("{0}")]
    Transport(String),

    /// Success status, but the body was not JSON.
    #[error("Failed to parse gateway response: {0}")]
    Decode(String),

    #[error("Invalid gateway URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
