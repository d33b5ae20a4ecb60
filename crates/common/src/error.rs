//! The `{ error, message }` envelope returned on every gateway failure.
//!
//! JSON output format:
//! ```json
//! {
//!   "error": "Failed to fetch flight data",
//!   "message": "Aviation-Edge API error fetching flights: 403 Forbidden"
//! }
//! ```
//!
//! `error` is a short, stable label clients may match on. `message` is
//! human-readable detail and must never carry the upstream credential.

use serde::{Deserialize, Serialize};

/// Normalized error body shared by the gateway (producer) and `ApiClient`
/// (consumer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Serialize as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error,
            "message": self.message,
        })
    }

    /// Recover a non-empty `message` from an error response body.
    ///
    /// Returns `None` when the body is not JSON, is not an object, or has no
    /// usable `message`, so the caller can fall back to a generic text.
    pub fn recover_message(body: &[u8]) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}
