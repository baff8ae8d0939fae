//! Listing Module
//!
//! Produces the authoritative list of background images behind the cache.

mod directory;
mod ordering;

pub use directory::DirectoryLister;
pub use ordering::{is_image_file, prepare_listing, NameOrder};

use async_trait::async_trait;

use crate::error::ListerError;

// == Public Constants ==
/// URL prefix under which background images are served
pub const IMAGE_URL_PREFIX: &str = "/backgroundImages";

/// File extensions accepted as background images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Source of the current background image list.
///
/// Implementations return root-relative paths already filtered and sorted.
#[async_trait]
pub trait ImageLister: Send + Sync {
    async fn list(&self) -> Result<Vec<String>, ListerError>;
}
