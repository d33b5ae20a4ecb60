//! `flightdeck config`: view and edit `~/.flightdeck/config.toml`.

use anyhow::Result;
use flightdeck_core::{workspace, ApiClient};
use flightdeck_types::output::ConfigOutput;
use flightdeck_utils::output::{render, OutputFormat};

/// `flightdeck config show`
pub fn show(fmt: OutputFormat) -> Result<()> {
    let config = workspace::load_config()?;
    let output = ConfigOutput {
        path: workspace::config_path()?.display().to_string(),
        proxy_url: config.proxy.url,
    };
    render(fmt, &output)
}

/// `flightdeck config set-url <URL>`
pub fn set_url(url: &str) -> Result<()> {
    // Validate before persisting.
    let client = ApiClient::new(url)?;
    let mut config = workspace::load_config()?;
    config.proxy.url = client.base_url().to_string();
    workspace::save_config(&config)?;
    println!("✓ Gateway URL set to {}", config.proxy.url);
    Ok(())
}
