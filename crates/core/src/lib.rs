pub mod client;
pub mod error;
pub mod workspace;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use workspace::init_workspace;
