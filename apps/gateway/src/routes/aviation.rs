//! Aviation-Edge proxy routes.
//!
//! Both endpoints are prefixed with `/api/`. Every query parameter is
//! forwarded upstream except `key`, which the gateway owns.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use flightdeck_common::QueryParams;
use serde_json::Value;

use super::not_found;
use crate::clients::aviation_edge::UpstreamResource;
use crate::error::GatewayError;
use crate::state::AppState;

/// Check the credential, then relay the upstream payload untouched.
async fn forward(
    state: &AppState,
    resource: UpstreamResource,
    raw_query: Option<String>,
) -> Result<Json<Value>, GatewayError> {
    let client = state
        .aviation
        .as_ref()
        .ok_or(GatewayError::CredentialMissing)?;

    let caller = QueryParams::from_query_str(raw_query.as_deref().unwrap_or_default());
    let data = client.fetch(resource, &caller).await?;
    Ok(Json(data))
}

/// GET /api/flights?flight_iata=AA100&dep_iata=JFK...
async fn flights(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, GatewayError> {
    forward(&state, UpstreamResource::Flights, query).await
}

/// GET /api/airports?codeIataCity=NYC...
async fn airports(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, GatewayError> {
    forward(&state, UpstreamResource::Airports, query).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/flights", get(flights).fallback(not_found))
        .route("/airports", get(airports).fallback(not_found))
}
