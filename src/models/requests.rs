//! Request DTOs for the community API
//!
//! Defines the structure of incoming query strings and form submissions.

use axum::body::Bytes;
use serde::Deserialize;

/// MIME types accepted for submission images
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Maximum accepted submission image size in bytes
pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024; // 8 MiB

/// Query string of GET /api/background-images
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackgroundImagesQuery {
    #[serde(default)]
    pub force: Option<ForceParam>,
}

/// Raw `force` value: a structured boolean or any string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ForceParam {
    Flag(bool),
    Text(String),
}

impl BackgroundImagesQuery {
    /// Only `"1"` or a literal boolean `true` force a refresh.
    pub fn is_forced(&self) -> bool {
        match &self.force {
            Some(ForceParam::Flag(flag)) => *flag,
            Some(ForceParam::Text(text)) => text == "1",
            None => false,
        }
    }
}

/// Image attached to a submission
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Multipart form as received, before validation
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub name: Option<String>,
    pub world: Option<String>,
    pub datacenter: Option<String>,
    pub image: Option<ImageUpload>,
}

/// A validated submission ready to relay
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub world: Option<String>,
    pub datacenter: Option<String>,
    pub image: ImageUpload,
}

impl SubmissionForm {
    /// Validates the form data
    ///
    /// Returns the validated submission, or the message to report otherwise.
    pub fn validate(self) -> Result<Submission, String> {
        let name = trimmed(self.name).ok_or_else(|| "Name is required!".to_string())?;
        let image = self.image.ok_or_else(|| "Image is required!".to_string())?;

        if !ALLOWED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
            return Err("Allowed formats: PNG, JPEG/JPG, WebP.".to_string());
        }
        if image.data.len() > MAX_IMAGE_BYTES {
            return Err("Image file size too big (max. 8 MB).".to_string());
        }

        Ok(Submission {
            name,
            world: trimmed(self.world),
            datacenter: trimmed(self.datacenter),
            image,
        })
    }
}

impl Submission {
    /// Message posted alongside the image.
    pub fn content(&self) -> String {
        let mut lines = vec![format!("New submission from {}", self.name)];
        if let Some(datacenter) = &self.datacenter {
            lines.push(format!("Datacenter: {}", datacenter));
        }
        if let Some(world) = &self.world {
            lines.push(format!("World: {}", world));
        }
        lines.join("\n")
    }

    /// Title of the forum thread the webhook opens.
    pub fn thread_name(&self) -> String {
        format!("Submission from {}", self.name)
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
