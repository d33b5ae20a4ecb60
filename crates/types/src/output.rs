//! Structured output types rendered by the CLI.

use serde::{Deserialize, Serialize};

use crate::flight::{Airport, Flight};

/// `GET /health` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthOutput {
    pub status: String,
    pub message: String,
}

/// Flight search results.
#[derive(Debug, Clone, Serialize)]
pub struct FlightsOutput {
    pub flights: Vec<Flight>,
}

/// Airport lookup results.
#[derive(Debug, Clone, Serialize)]
pub struct AirportsOutput {
    pub airports: Vec<Airport>,
}

/// CLI config view.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigOutput {
    pub path: String,
    pub proxy_url: String,
}
