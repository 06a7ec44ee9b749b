//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod engagement;
pub mod error;
pub mod feed;
pub mod follows;
pub mod health;
pub mod posts;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
