//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::QueryRejection,
        Multipart, Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::ImageListCache;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::listing::DirectoryLister;
use crate::models::{
    BackgroundImagesQuery, HealthResponse, ImageUpload, RealmData, SubmissionForm,
    SubmitResponse,
};
use crate::relay::WebhookRelay;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide background image cache
    pub images: Arc<ImageListCache>,
    /// Submission webhook client
    pub relay: WebhookRelay,
    /// Directory the listed images are served from
    pub images_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(images: ImageListCache, relay: WebhookRelay, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images: Arc::new(images),
            relay,
            images_dir: images_dir.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The image cache lists `config.images_dir` on disk.
    pub fn from_config(config: &Config) -> Result<Self> {
        let lister = Arc::new(DirectoryLister::new(&config.images_dir));
        let relay = WebhookRelay::new(
            config.webhook_url.clone(),
            Duration::from_secs(config.webhook_timeout),
        )?;

        Ok(Self::new(
            ImageListCache::new(lister),
            relay,
            config.images_dir.clone(),
        ))
    }
}

/// Handler for GET /api/background-images
///
/// Always answers 200; a failed directory scan degrades to the previous
/// listing or an empty array, sent with `Cache-Control: no-store`.
pub async fn background_images_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<BackgroundImagesQuery>, QueryRejection>,
) -> Response {
    let force = match query {
        Ok(Query(query)) => query.is_forced(),
        Err(rejection) => {
            debug!("Ignoring malformed background image query: {}", rejection);
            false
        }
    };

    let lookup = state.images.get(force).await;

    (
        [(header::CACHE_CONTROL, lookup.cache_control())],
        Json(lookup.items()),
    )
        .into_response()
}

/// Handler for GET /api/ffxiv-realms
pub async fn realms_handler() -> Json<RealmData> {
    Json(RealmData::builtin())
}

/// Handler for POST /api/submit
///
/// Validates the multipart form and relays it to the webhook.
pub async fn submit_handler(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<SubmitResponse>> {
    // Configuration is checked before the body is read
    state.relay.webhook_url()?;

    let mut multipart = multipart.map_err(|rejection| {
        debug!("Rejected submission body: {}", rejection);
        AppError::InvalidRequest("Form data missing.".to_string())
    })?;

    let form = read_submission_form(&mut multipart).await?;
    let submission = form.validate().map_err(AppError::InvalidRequest)?;

    state.relay.relay(&submission).await?;

    Ok(Json(SubmitResponse::ok()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Collects the known fields of a submission.
///
/// Parts with a content type are files; only `image` is kept. Parts without
/// one are text fields.
async fn read_submission_form(multipart: &mut Multipart) -> Result<SubmissionForm> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();

        match field.content_type().map(str::to_string) {
            Some(content_type) => {
                if name != "image" {
                    continue;
                }
                let filename = field
                    .file_name()
                    .filter(|f| !f.is_empty())
                    .unwrap_or("upload")
                    .to_string();
                let data = field.bytes().await.map_err(form_error)?;
                form.image = Some(ImageUpload {
                    filename,
                    content_type,
                    data,
                });
            }
            None => {
                let value = field.text().await.map_err(form_error)?;
                match name.as_str() {
                    "name" => form.name = Some(value),
                    "world" => form.world = Some(value),
                    "datacenter" => form.datacenter = Some(value),
                    _ => {}
                }
            }
        }
    }

    Ok(form)
}

fn form_error(err: MultipartError) -> AppError {
    AppError::InvalidRequest(format!("Form data missing: {}", err.body_text()))
}
