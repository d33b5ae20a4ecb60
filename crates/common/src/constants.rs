//! Universal constants for Flightdeck.

/// Aviation-Edge public API root. Resources hang directly off it.
pub const UPSTREAM_BASE_URL: &str = "https://aviation-edge.com/v2/public";

/// Query parameter the upstream reads the credential from.
/// Only the gateway ever writes it.
pub const CREDENTIAL_PARAM: &str = "key";

/// Placeholder written in place of the credential in logs and messages.
pub const REDACTED_KEY: &str = "[API_KEY]";

/// Default gateway listening port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default gateway base URL used by `ApiClient::shared()` and the CLI.
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3001/api";

// ── Environment variables ───────────────────────────────────────────

pub const ENV_PORT: &str = "PORT";
pub const ENV_API_KEY: &str = "AVIATION_EDGE_API_KEY";
pub const ENV_UPSTREAM_URL: &str = "AVIATION_EDGE_BASE_URL";
pub const ENV_PROXY_URL: &str = "FLIGHTDECK_PROXY_URL";

// ── Error envelope labels ───────────────────────────────────────────

pub const LABEL_KEY_MISSING: &str = "API key not configured";
pub const LABEL_NOT_FOUND: &str = "Not found";
pub const LABEL_INTERNAL: &str = "Internal server error";
