//! Typed views over the upstream flight and airport records.
//!
//! The gateway and `ApiClient` pass records through as opaque JSON. These
//! structs exist for renderers that want named fields, so every field is
//! optional, unknown fields are ignored, and a mistyped value (a numeric
//! `terminal`, a string `delay`) is coerced or dropped instead of failing
//! the whole record.

use flightdeck_common::QueryParams;
use serde::{Deserialize, Serialize};

/// One end of a flight leg.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct FlightEndpoint {
    #[serde(deserialize_with = "lenient::string")]
    pub airport: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub iata: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icao: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub terminal: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub gate: Option<String>,
    /// Arrival side only.
    #[serde(deserialize_with = "lenient::string")]
    pub baggage: Option<String>,
    /// Minutes.
    #[serde(deserialize_with = "lenient::number")]
    pub delay: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub scheduled: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub estimated: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub actual: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub estimated_runway: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub actual_runway: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Airline {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub iata: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icao: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct FlightNumber {
    #[serde(deserialize_with = "lenient::string")]
    pub number: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub iata: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icao: Option<String>,
    pub codeshared: Option<serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Aircraft {
    #[serde(deserialize_with = "lenient::string")]
    pub registration: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub iata: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icao: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icao24: Option<String>,
}

/// Live position, present only while airborne tracking data exists.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LivePosition {
    #[serde(deserialize_with = "lenient::string")]
    pub updated: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub altitude: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub direction: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub speed_horizontal: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub speed_vertical: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_ground: bool,
}

/// Flight record from `/api/flights`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Flight {
    #[serde(deserialize_with = "lenient::string")]
    pub flight_date: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub flight_status: Option<String>,
    #[serde(deserialize_with = "lenient::record")]
    pub departure: Option<FlightEndpoint>,
    #[serde(deserialize_with = "lenient::record")]
    pub arrival: Option<FlightEndpoint>,
    #[serde(deserialize_with = "lenient::record")]
    pub airline: Option<Airline>,
    #[serde(deserialize_with = "lenient::record")]
    pub flight: Option<FlightNumber>,
    #[serde(deserialize_with = "lenient::record")]
    pub aircraft: Option<Aircraft>,
    #[serde(deserialize_with = "lenient::record")]
    pub live: Option<LivePosition>,
}

impl Flight {
    /// IATA flight designator, e.g. `AA100`.
    pub fn designator(&self) -> Option<&str> {
        self.flight.as_ref()?.iata.as_deref()
    }

    pub fn departure_iata(&self) -> Option<&str> {
        self.departure.as_ref()?.iata.as_deref()
    }

    pub fn arrival_iata(&self) -> Option<&str> {
        self.arrival.as_ref()?.iata.as_deref()
    }

    pub fn airline_name(&self) -> Option<&str> {
        self.airline.as_ref()?.name.as_deref()
    }
}

/// Airport record from `/api/airports`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Airport {
    #[serde(deserialize_with = "lenient::string")]
    pub airport_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub iata_code: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub icao_code: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub country_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub country_iso2: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub city_name: Option<String>,
}

/// Decode an opaque payload into typed records.
///
/// Non-array payloads and elements that are not objects are skipped rather
/// than failing the whole list.
pub fn decode_records<T: for<'de> Deserialize<'de>>(payload: &serde_json::Value) -> Vec<T> {
    payload
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Field-level deserializers that never fail on a wrong JSON type.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => matches!(s.trim(), "true" | "1"),
            _ => false,
        })
    }

    /// Nested object; anything that is not one becomes `None`.
    pub fn record<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(Value::deserialize(d)?).ok())
    }
}

// ── Search filters ──────────────────────────────────────────────────

/// Flight search filters. Absent fields never reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSearchParams {
    pub flight_iata: Option<String>,
    pub dep_iata: Option<String>,
    pub arr_iata: Option<String>,
    pub airline_iata: Option<String>,
    pub flight_status: Option<String>,
}

impl FlightSearchParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("flight_iata", self.flight_iata.clone())
            .with("dep_iata", self.dep_iata.clone())
            .with("arr_iata", self.arr_iata.clone())
            .with("airline_iata", self.airline_iata.clone())
            .with("flight_status", self.flight_status.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}
