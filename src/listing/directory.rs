//! Directory Lister
//!
//! Scans the background image directory on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{prepare_listing, ImageLister};
use crate::error::ListerError;

/// Lists the image files of a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryLister {
    dir: PathBuf,
}

impl DirectoryLister {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_names(&self) -> std::io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!("Skipping non UTF-8 file name {:?}", raw),
            }
        }

        Ok(names)
    }
}

#[async_trait]
impl ImageLister for DirectoryLister {
    async fn list(&self) -> Result<Vec<String>, ListerError> {
        let names = self
            .read_names()
            .await
            .map_err(|source| ListerError::ReadDir {
                path: self.dir.clone(),
                source,
            })?;

        prepare_listing(names)
    }
}
