//! EorzeaDates - Community site backend
//!
//! Serves realm reference data, relays profile submissions to a chat webhook
//! and lists background images through a time-boxed, fail-soft cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod relay;

pub use api::AppState;
pub use config::Config;
