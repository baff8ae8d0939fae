//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default directory scanned for background images.
pub const DEFAULT_IMAGES_DIR: &str = "public/backgroundImages";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Directory listed by the background image endpoint and served statically
    pub images_dir: PathBuf,
    /// Chat webhook receiving submissions, None = submissions are rejected
    pub webhook_url: Option<String>,
    /// Timeout in seconds for a single webhook delivery
    pub webhook_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `BACKGROUND_IMAGES_DIR` - Image directory (default: public/backgroundImages)
    /// - `DISCORD_WEBHOOK_URL` - Submission webhook (default: unset)
    /// - `WEBHOOK_TIMEOUT` - Webhook timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            images_dir: env::var("BACKGROUND_IMAGES_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
            webhook_url: env::var("DISCORD_WEBHOOK_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            webhook_timeout: env::var("WEBHOOK_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            webhook_url: None,
            webhook_timeout: 30,
        }
    }
}
