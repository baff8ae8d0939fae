//! Error types for the community backend
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for request handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or incomplete request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Required server configuration is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The submission webhook rejected or failed the delivery
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Lister Error ==
/// Failure of the directory scan behind the image cache.
///
/// Never reaches a client; the cache absorbs it and serves what it has.
#[derive(Error, Debug)]
pub enum ListerError {
    /// The directory could not be opened or iterated
    #[error("failed to read {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Collation data for ordering names could not be loaded
    #[error("failed to load collation data: {0}")]
    Collation(String),
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, AppError>;
