//! API Module
//!
//! HTTP handlers and routing for the community REST API.
//!
//! # Endpoints
//! - `GET /api/background-images` - Cached background image listing
//! - `GET /api/ffxiv-realms` - Realm reference data
//! - `POST /api/submit` - Relay a profile submission
//! - `GET /backgroundImages/*` - Background image files
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
