//! Health check endpoint.

use std::sync::Arc;
use axum::{Router, Json, routing::get};
use serde_json::{json, Value};
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Aviation-Edge Proxy Server is running",
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health).fallback(super::not_found))
}
