pub mod airports;
pub mod configure;
pub mod flights;
pub mod health;
pub mod helpers;
