//! Stub upstream → gateway → `ApiClient`, over real sockets.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use flightdeck_common::{ApiKey, QueryParams};
use flightdeck_core::{ApiClient, ClientError};
use flightdeck_gateway::{app, AppState, GatewayConfig};
use serde_json::{json, Value};

const SECRET: &str = "integration-secret";

const FLIGHTS: &str = r#"[{"flight_status":"scheduled","flight":{"iata":"AA100","number":"100","codeshared":null},"departure":{"iata":"JFK","scheduled":"2026-10-19T18:00:00+00:00"},"arrival":{"iata":"LHR","terminal":"5"},"airline":{"name":"American Airlines","iata":"AA"}},{"flight_status":"active","flight":{"iata":"AA101"}}]"#;

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    addr
}

async fn spawn_gateway(api_key: Option<&str>, upstream: SocketAddr) -> ApiClient {
    let config = GatewayConfig {
        port: 0,
        api_key: api_key.and_then(ApiKey::new),
        upstream_url: format!("http://{upstream}"),
    };
    let state = Arc::new(AppState::from_config(&config).unwrap());
    let gw = spawn(app(state)).await;
    ApiClient::new(&format!("http://{gw}/api")).unwrap()
}

/// `/flights` serves the fixture; `/cityDatabase` echoes the query it got.
async fn spawn_upstream() -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let (h1, h2) = (hits.clone(), hits.clone());
    let router = Router::new()
        .route(
            "/flights",
            get(move || {
                let hits = h1.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    ([("content-type", "application/json")], FLIGHTS)
                }
            }),
        )
        .route(
            "/cityDatabase",
            get(move |RawQuery(q): RawQuery| {
                let hits = h2.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!([{ "query": q }]))
                }
            }),
        );
    (spawn(router).await, hits)
}

#[tokio::test]
async fn flights_round_trip_is_byte_identical() {
    let (upstream, hits) = spawn_upstream().await;
    let client = spawn_gateway(Some(SECRET), upstream).await;

    let payload = client.get_flight_by_number("AA100").await.unwrap();
    assert_eq!(serde_json::to_string(&payload).unwrap(), FLIGHTS);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn client_params_reach_upstream_with_injected_key() {
    let (upstream, _) = spawn_upstream().await;
    let client = spawn_gateway(Some(SECRET), upstream).await;

    let mut params = QueryParams::new();
    params
        .push("codeIataCity", "NYC")
        .push("key", "client-guess")
        .push("empty", "");
    let payload = client.get_airports(&params).await.unwrap();

    let seen = payload[0]["query"].as_str().unwrap();
    assert_eq!(seen, format!("key={SECRET}&codeIataCity=NYC"));
}

#[tokio::test]
async fn missing_key_surfaces_envelope_message() {
    let (upstream, hits) = spawn_upstream().await;
    let client = spawn_gateway(None, upstream).await;

    let err = client.get_flights_by_route("JFK", "LHR").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.to_string(),
        "Please set AVIATION_EDGE_API_KEY environment variable"
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_rejection_reaches_client_without_key() {
    let router = Router::new().route(
        "/flights",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" }))) }),
    );
    let upstream = spawn(router).await;
    let client = spawn_gateway(Some(SECRET), upstream).await;

    let err = client.get_flights_by_airline("AA").await.unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(message, "Aviation-Edge API error fetching flights: 401 Unauthorized");
    assert!(!message.contains(SECRET));
}

#[tokio::test]
async fn health_through_client() {
    let (upstream, hits) = spawn_upstream().await;
    let client = spawn_gateway(None, upstream).await;

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "OK");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_api_route_is_404_envelope() {
    let (upstream, _) = spawn_upstream().await;
    let gw_client = spawn_gateway(Some(SECRET), upstream).await;
    let base = gw_client.base_url().trim_end_matches("/api").to_string();

    let resp = reqwest::get(format!("{base}/api/unknown")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Route GET /api/unknown not found");
}
