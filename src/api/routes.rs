//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    background_images_handler, health_handler, realms_handler, submit_handler, AppState,
};
use crate::listing::IMAGE_URL_PREFIX;
use crate::models::MAX_IMAGE_BYTES;

/// Request body limit, leaving room for the form around a maximum-size image
pub const MAX_BODY_BYTES: usize = MAX_IMAGE_BYTES + 2 * 1024 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/background-images` - Cached background image listing
/// - `GET /api/ffxiv-realms` - Realm reference data
/// - `POST /api/submit` - Relay a profile submission
/// - `GET /backgroundImages/*` - The image files themselves
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Body limit: raised so oversized images reach validation
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let images = ServeDir::new(&state.images_dir);

    Router::new()
        .route("/api/background-images", get(background_images_handler))
        .route("/api/ffxiv-realms", get(realms_handler))
        .route("/api/submit", post(submit_handler))
        .route("/health", get(health_handler))
        .nest_service(IMAGE_URL_PREFIX, images)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ImageListCache;
    use crate::listing::DirectoryLister;
    use crate::relay::WebhookRelay;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app(dir: &Path) -> Router {
        let lister = Arc::new(DirectoryLister::new(dir));
        let relay = WebhookRelay::new(None, Duration::from_secs(1)).unwrap();
        let state = AppState::new(ImageListCache::new(lister), relay, dir);
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_test_app(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_realms_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_test_app(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/ffxiv-realms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_background_images_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bg1.png"), b"png").unwrap();
        let app = create_test_app(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/background-images")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::CACHE_CONTROL));
    }

    #[tokio::test]
    async fn test_serves_image_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bg1.png"), b"png-bytes").unwrap();
        let app = create_test_app(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/backgroundImages/bg1.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"png-bytes");
    }

    #[tokio::test]
    async fn test_submit_without_webhook() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_test_app(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/submit")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
