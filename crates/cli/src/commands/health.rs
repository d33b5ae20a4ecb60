//! `flightdeck health`: gateway liveness.

use anyhow::Result;
use flightdeck_utils::output::{render, OutputFormat};

use super::helpers::client;

pub async fn run(fmt: OutputFormat) -> Result<()> {
    let client = client();
    let health = client.health().await?;
    render(fmt, &health)
}
