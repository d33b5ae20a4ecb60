//! HTTP routes for the Flightdeck gateway.

pub mod aviation;
pub mod health;

use std::sync::Arc;

use axum::extract::OriginalUri;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};

use crate::error::GatewayError;
use crate::state::AppState;

/// Build the `/api` router with all proxy routes.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new().merge(aviation::router())
}

/// The complete application: health, `/api`, 404 fallback, CORS and the
/// panic boundary.
pub fn app(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .merge(health::router())
        .nest("/api", api_router())
        .fallback(not_found)
        .with_state(state);

    with_boundary(router)
}

/// Wrap a router in the gateway's outer layers.
pub fn with_boundary(router: Router) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    // CORS outermost so panic envelopes stay readable cross-origin.
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer)
}

/// Any method/path without a declared route.
pub(crate) async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> GatewayError {
    GatewayError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    GatewayError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Json;
    use flightdeck_common::{ApiKey, QueryParams};
    use serde_json::{json, Value};

    use super::*;
    use crate::config::GatewayConfig;

    const SECRET: &str = "route-test-secret";

    const FLIGHTS_FIXTURE: &str = r#"[{"flight_date":"2026-10-19","flight_status":"active","departure":{"iata":"JFK","delay":null},"arrival":{"iata":"LAX","gate":"B12"},"flight":{"iata":"AA100","number":"100"},"live":{"latitude":40.64,"is_ground":false}}]"#;

    async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        addr
    }

    /// Upstream stub: counts hits, echoes the query as `[[name, value], ...]`
    /// on `/flights`, serves a fixed payload on `/cityDatabase`.
    async fn spawn_upstream() -> (SocketAddr, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let (h1, h2) = (hits.clone(), hits.clone());
        let stub = Router::new()
            .route(
                "/flights",
                get(move |RawQuery(q): RawQuery| {
                    let hits = h1.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        let pairs: Vec<[String; 2]> =
                            QueryParams::from_query_str(q.as_deref().unwrap_or(""))
                                .iter()
                                .map(|(n, v)| [n.to_string(), v.to_string()])
                                .collect();
                        Json(json!(pairs))
                    }
                }),
            )
            .route(
                "/cityDatabase",
                get(move || {
                    let hits = h2.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        (
                            [("content-type", "application/json")],
                            FLIGHTS_FIXTURE,
                        )
                    }
                }),
            );
        (spawn(stub).await, hits)
    }

    async fn spawn_gateway(api_key: Option<&str>, upstream_url: String) -> SocketAddr {
        let config = GatewayConfig {
            port: 0,
            api_key: api_key.and_then(ApiKey::new),
            upstream_url,
        };
        let state = Arc::new(AppState::from_config(&config).unwrap());
        spawn(app(state)).await
    }

    async fn get_json(url: String) -> (StatusCode, Value) {
        let resp = reqwest::get(url).await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let gw = spawn_gateway(None, "http://127.0.0.1:9".into()).await;
        let (status, body) = get_json(format!("http://{gw}/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_404() {
        let gw = spawn_gateway(None, "http://127.0.0.1:9".into()).await;
        let (status, body) = get_json(format!("http://{gw}/unknown/path?x=1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["message"], "Route GET /unknown/path not found");
    }

    #[tokio::test]
    async fn test_unknown_route_under_api_keeps_full_path() {
        let gw = spawn_gateway(None, "http://127.0.0.1:9".into()).await;
        let (status, body) = get_json(format!("http://{gw}/api/routes")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Route GET /api/routes not found");
    }

    #[tokio::test]
    async fn test_wrong_method_is_404() {
        let gw = spawn_gateway(Some(SECRET), "http://127.0.0.1:9".into()).await;
        let resp = reqwest::Client::new()
            .post(format!("http://{gw}/api/flights"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["message"], "Route POST /api/flights not found");
    }

    #[tokio::test]
    async fn test_missing_credential_never_calls_upstream() {
        let (upstream, hits) = spawn_upstream().await;
        let gw = spawn_gateway(None, format!("http://{upstream}")).await;

        for path in ["flights?flight_iata=AA100", "airports"] {
            let (status, body) = get_json(format!("http://{gw}/api/{path}")).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["error"], "API key not configured");
            assert!(body["message"].as_str().unwrap().contains("AVIATION_EDGE_API_KEY"));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_caller_key_cannot_override_credential() {
        let (upstream, hits) = spawn_upstream().await;
        let gw = spawn_gateway(Some(SECRET), format!("http://{upstream}")).await;

        let (status, body) =
            get_json(format!("http://{gw}/api/flights?key=stolen&flight_iata=AA100&key=again")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([["key", SECRET], ["flight_iata", "AA100"]]));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bracketed_caller_key_cannot_reach_upstream() {
        let (upstream, _) = spawn_upstream().await;
        let gw = spawn_gateway(Some(SECRET), format!("http://{upstream}")).await;

        let (status, body) = get_json(format!(
            "http://{gw}/api/flights?key%5B%5D=evil&key%5B0%5D=evil2&flight_iata=AA1"
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([["key", SECRET], ["flight_iata", "AA1"]]));
    }

    #[tokio::test]
    async fn test_params_forwarded_without_drop_or_duplication() {
        let (upstream, _) = spawn_upstream().await;
        let gw = spawn_gateway(Some(SECRET), format!("http://{upstream}")).await;

        let (_, body) = get_json(format!(
            "http://{gw}/api/flights?dep_iata=JFK&arr_iata=LAX&airline_iata=AA&flight_status=active"
        ))
        .await;
        assert_eq!(
            body,
            json!([
                ["key", SECRET],
                ["dep_iata", "JFK"],
                ["arr_iata", "LAX"],
                ["airline_iata", "AA"],
                ["flight_status", "active"]
            ])
        );
    }

    #[tokio::test]
    async fn test_upstream_payload_relayed_byte_identical() {
        let (upstream, _) = spawn_upstream().await;
        let gw = spawn_gateway(Some(SECRET), format!("http://{upstream}")).await;

        let resp = reqwest::get(format!("http://{gw}/api/airports")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), FLIGHTS_FIXTURE);
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let stub = Router::new().route(
            "/flights",
            get(|| async { (StatusCode::FORBIDDEN, "invalid key") }),
        );
        let upstream = spawn(stub).await;
        let gw = spawn_gateway(Some(SECRET), format!("http://{upstream}")).await;

        let resp = reqwest::get(format!("http://{gw}/api/flights")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = resp.text().await.unwrap();
        assert!(!text.contains(SECRET));

        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"], "Failed to fetch flight data");
        assert_eq!(
            body["message"],
            "Aviation-Edge API error fetching flights: 403 Forbidden"
        );
    }

    #[tokio::test]
    async fn test_upstream_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = listener.local_addr().unwrap();
        drop(listener);
        let gw = spawn_gateway(Some(SECRET), format!("http://{dead}")).await;

        let resp = reqwest::get(format!("http://{gw}/api/airports?key=x")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = resp.text().await.unwrap();
        assert!(!text.contains(SECRET));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"], "Failed to fetch airport data");
    }

    async fn boom() -> &'static str {
        panic!("kaboom")
    }

    #[tokio::test]
    async fn test_panic_boundary() {
        let addr = spawn(with_boundary(Router::new().route("/boom", get(boom)))).await;
        let (status, body) = get_json(format!("http://{addr}/boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "kaboom");
    }

    #[tokio::test]
    async fn test_panic_envelope_carries_cors_headers() {
        let addr = spawn(with_boundary(Router::new().route("/boom", get(boom)))).await;
        let resp = reqwest::Client::new()
            .get(format!("http://{addr}/boom"))
            .header("origin", "http://localhost:5173")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
