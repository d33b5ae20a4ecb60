//! Shared helpers for CLI commands.

use anyhow::{bail, Result};
use flightdeck_common::QueryParams;
use flightdeck_core::ApiClient;
use flightdeck_utils::output::{render_json_or, OutputFormat};
use serde_json::Value;

/// The process-wide gateway client (config file, `FLIGHTDECK_PROXY_URL` wins).
pub fn client() -> &'static ApiClient {
    ApiClient::shared()
}

/// Parse `name=value` pairs from `--param` flags.
pub fn parse_params(raw: &[String]) -> Result<QueryParams> {
    let mut params = QueryParams::new();
    for item in raw {
        let Some((name, value)) = item.split_once('=') else {
            bail!("Invalid parameter '{item}'. Use name=value");
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid parameter '{item}': empty name");
        }
        params.push_opt(name, Some(value.trim()));
    }
    Ok(params)
}

/// JSON modes print the gateway payload unchanged; returns false in table mode.
pub fn print_raw(fmt: OutputFormat, payload: &Value) -> Result<bool> {
    render_json_or(fmt, payload)
}
