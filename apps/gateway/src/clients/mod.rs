//! Upstream API clients.

pub mod aviation_edge;
