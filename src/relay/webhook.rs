//! Webhook Relay
//!
//! Posts a submission to a Discord forum webhook as a new thread, with the
//! image attached as `files[0]` and the message in `payload_json`.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::models::Submission;

/// JSON part of the webhook request
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    /// Opens a new thread when the webhook targets a forum channel
    pub thread_name: String,
}

impl From<&Submission> for WebhookPayload {
    fn from(submission: &Submission) -> Self {
        Self {
            content: submission.content(),
            thread_name: submission.thread_name(),
        }
    }
}

/// HTTP client bound to the submission webhook.
#[derive(Debug, Clone)]
pub struct WebhookRelay {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl WebhookRelay {
    /// Creates a relay; `webhook_url` None leaves submissions unconfigured.
    pub fn new(webhook_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Returns the webhook URL or the configuration error reported to clients.
    pub fn webhook_url(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| AppError::Configuration("DISCORD_WEBHOOK_URL is not set.".to_string()))
    }

    // == Relay ==
    /// Delivers the submission.
    ///
    /// A non-success webhook status or a transport failure becomes
    /// [`AppError::Upstream`].
    pub async fn relay(&self, submission: &Submission) -> Result<()> {
        let url = self.webhook_url()?;
        let form = build_form(submission)?;

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Webhook request failed");
                AppError::Upstream(format!("Discord webhook unreachable: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Webhook rejected submission");
            let detail = if body.is_empty() {
                "Unknown error"
            } else {
                body.as_str()
            };
            return Err(AppError::Upstream(format!(
                "Discord webhook failed ({}): {}",
                status.as_u16(),
                detail
            )));
        }

        info!("Relayed submission from {}", submission.name);
        Ok(())
    }
}

fn build_form(submission: &Submission) -> Result<Form> {
    let payload = serde_json::to_string(&WebhookPayload::from(submission))
        .map_err(|e| AppError::Internal(format!("Failed to encode payload: {}", e)))?;

    let image = &submission.image;
    let file = Part::bytes(image.data.to_vec())
        .file_name(image.filename.clone())
        .mime_str(&image.content_type)
        .map_err(|e| AppError::Internal(format!("Invalid image content type: {}", e)))?;

    Ok(Form::new().text("payload_json", payload).part("files[0]", file))
}
