//! Relay Module
//!
//! Forwards validated profile submissions to the configured chat webhook.

mod webhook;

pub use webhook::{WebhookPayload, WebhookRelay};
