//! Unified output rendering: JSON or human-readable table.
//!
//! Usage:
//! ```ignore
//! use flightdeck_utils::output::{OutputFormat, render};
//!
//! let data = FlightsOutput { ... };
//! render(format, &data)?;
//! ```

use anyhow::Result;
use serde::Serialize;

use crate::format::{clock_time, or_dash, truncate};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default).
    Table,
    /// Compact JSON (for piping to jq, scripts).
    Json,
    /// Pretty-printed JSON (for reading).
    JsonPretty,
}

/// Trait for types that can render as a human-readable table.
pub trait TableDisplay {
    fn print_table(&self);
}

/// Render structured output as JSON or a table, per format.
pub fn render<T: Serialize + TableDisplay>(format: OutputFormat, data: &T) -> Result<()> {
    if !render_json_or(format, data)? {
        data.print_table();
    }
    Ok(())
}

/// Render just the JSON formats (for types that handle their own table display).
/// Returns true if JSON was rendered, false if table mode was requested.
pub fn render_json_or<T: Serialize>(format: OutputFormat, data: &T) -> Result<bool> {
    match format {
        OutputFormat::Table => Ok(false),
        OutputFormat::Json => {
            let json = serde_json::to_string(data)?;
            println!("{json}");
            Ok(true)
        }
        OutputFormat::JsonPretty => {
            let json = serde_json::to_string_pretty(data)?;
            println!("{json}");
            Ok(true)
        }
    }
}

// ─── TableDisplay implementations for output types ──────────────────

use flightdeck_types::output::*;

impl TableDisplay for HealthOutput {
    fn print_table(&self) {
        let mark = if self.status.eq_ignore_ascii_case("ok") { "✓" } else { "✗" };
        println!("{mark} {} — {}", self.status, self.message);
    }
}

impl TableDisplay for FlightsOutput {
    fn print_table(&self) {
        if self.flights.is_empty() {
            println!("No flights found.");
            return;
        }

        println!(
            "{:<8} {:<22} {:<5} {:>5}   {:<5} {:>5}   {:<10} {:>6}",
            "FLIGHT", "AIRLINE", "FROM", "DEP", "TO", "ARR", "STATUS", "DELAY"
        );
        println!("{}", "─".repeat(78));
        for f in &self.flights {
            let dep = f.departure.as_ref();
            let arr = f.arrival.as_ref();
            let dep_time = dep.and_then(|d| d.scheduled.as_deref()).map(clock_time);
            let arr_time = arr.and_then(|a| a.scheduled.as_deref()).map(clock_time);
            let delay = dep
                .and_then(|d| d.delay)
                .map(|m| format!("{m}m"))
                .unwrap_or_default();

            println!(
                "{:<8} {:<22} {:<5} {:>5}   {:<5} {:>5}   {:<10} {:>6}",
                or_dash(f.designator()),
                truncate(or_dash(f.airline_name()), 22),
                or_dash(f.departure_iata()),
                or_dash(dep_time),
                or_dash(f.arrival_iata()),
                or_dash(arr_time),
                or_dash(f.flight_status.as_deref()),
                delay,
            );
        }
        println!("\n{} flight(s)", self.flights.len());
    }
}

impl TableDisplay for AirportsOutput {
    fn print_table(&self) {
        if self.airports.is_empty() {
            println!("No airports found.");
            return;
        }

        println!(
            "{:<5} {:<5} {:<32} {:<20} {:<4}",
            "IATA", "ICAO", "AIRPORT", "CITY", "CC"
        );
        println!("{}", "─".repeat(70));
        for a in &self.airports {
            println!(
                "{:<5} {:<5} {:<32} {:<20} {:<4}",
                or_dash(a.iata_code.as_deref()),
                or_dash(a.icao_code.as_deref()),
                truncate(or_dash(a.airport_name.as_deref()), 32),
                truncate(or_dash(a.city_name.as_deref()), 20),
                or_dash(a.country_iso2.as_deref()),
            );
        }
        println!("\n{} airport(s)", self.airports.len());
    }
}

impl TableDisplay for ConfigOutput {
    fn print_table(&self) {
        println!("Config file : {}", self.path);
        println!("Gateway URL : {}", self.proxy_url);
    }
}
