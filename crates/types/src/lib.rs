pub mod config;
pub mod flight;
pub mod output;
