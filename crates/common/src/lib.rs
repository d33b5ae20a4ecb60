//! Shared building blocks for the gateway and its clients.

pub mod constants;
pub mod error;
pub mod params;

pub use error::ErrorEnvelope;
pub use params::{ApiKey, QueryParams};
