//! `flightdeck search|flight|route|airline`: flight lookups.
//!
//! These call the Flightdeck gateway, which proxies to Aviation-Edge.
//! Requires `flightdeck-gateway` to be running.

use anyhow::{bail, Result};
use flightdeck_common::QueryParams;
use flightdeck_types::flight::{decode_records, FlightSearchParams};
use flightdeck_types::output::FlightsOutput;
use flightdeck_utils::output::{OutputFormat, TableDisplay};
use serde_json::Value;

use super::helpers::{client, print_raw};

/// `flightdeck search [--flight X] [--dep X] [--arr X] [--airline X] [--status X]`
pub async fn search(filters: FlightSearchParams, extra: QueryParams, fmt: OutputFormat) -> Result<()> {
    let mut params = filters.to_query();
    for (name, value) in extra.iter() {
        params.push(name, value);
    }
    if params.is_empty() {
        bail!("Give at least one filter, e.g. --flight AA100 or --dep JFK --arr LAX");
    }

    let payload = client().search_flights(&params).await?;
    show(fmt, &payload)
}

/// `flightdeck flight <IATA>`
pub async fn by_number(flight_iata: &str, fmt: OutputFormat) -> Result<()> {
    let payload = client().get_flight_by_number(&flight_iata.to_uppercase()).await?;
    show(fmt, &payload)
}

/// `flightdeck route <DEP> <ARR>`
pub async fn by_route(dep: &str, arr: &str, fmt: OutputFormat) -> Result<()> {
    let payload = client()
        .get_flights_by_route(&dep.to_uppercase(), &arr.to_uppercase())
        .await?;
    show(fmt, &payload)
}

/// `flightdeck airline <IATA>`
pub async fn by_airline(airline_iata: &str, fmt: OutputFormat) -> Result<()> {
    let payload = client()
        .get_flights_by_airline(&airline_iata.to_uppercase())
        .await?;
    show(fmt, &payload)
}

fn show(fmt: OutputFormat, payload: &Value) -> Result<()> {
    if !print_raw(fmt, payload)? {
        FlightsOutput {
            flights: decode_records(payload),
        }
        .print_table();
    }
    Ok(())
}
