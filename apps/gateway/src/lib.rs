//! Flightdeck gateway: Aviation-Edge proxy.
//!
//! Responsibilities:
//! - Own the Aviation-Edge credential and inject it into every upstream call
//! - Forward caller query parameters, minus any attempt to override `key`
//! - Relay upstream JSON untouched, or a normalized `{error, message}` envelope

pub mod clients;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use routes::app;
pub use state::AppState;
