//! Request and Response models for the community API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod realms;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use realms::RealmData;
pub use requests::{
    BackgroundImagesQuery, ForceParam, ImageUpload, Submission, SubmissionForm,
    ALLOWED_IMAGE_TYPES, MAX_IMAGE_BYTES,
};
pub use responses::{ErrorResponse, HealthResponse, SubmitResponse};
