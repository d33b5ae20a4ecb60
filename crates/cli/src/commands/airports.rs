//! `flightdeck airports [--param name=value]...`

use anyhow::Result;
use flightdeck_types::flight::decode_records;
use flightdeck_types::output::AirportsOutput;
use flightdeck_utils::output::{OutputFormat, TableDisplay};

use super::helpers::{client, parse_params, print_raw};

pub async fn run(raw_params: &[String], fmt: OutputFormat) -> Result<()> {
    let params = parse_params(raw_params)?;
    let payload = client().get_airports(&params).await?;

    if !print_raw(fmt, &payload)? {
        AirportsOutput {
            airports: decode_records(&payload),
        }
        .print_table();
    }
    Ok(())
}
