//! Lister double shared by the cache tests.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ListerError;
use crate::listing::ImageLister;

/// Lister answering with a scripted listing, or failing when none is set.
#[derive(Debug, Default)]
pub(crate) struct ScriptedLister {
    response: Mutex<Option<Vec<String>>>,
    calls: AtomicUsize,
}

impl ScriptedLister {
    pub(crate) fn succeeding(items: &[&str]) -> Self {
        let lister = Self::default();
        lister.succeed_with(items);
        lister
    }

    pub(crate) fn failing() -> Self {
        Self::default()
    }

    pub(crate) fn succeed_with(&self, items: &[&str]) {
        let items = items.iter().map(|s| s.to_string()).collect();
        *self.response.lock().unwrap() = Some(items);
    }

    pub(crate) fn fail(&self) {
        *self.response.lock().unwrap() = None;
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageLister for ScriptedLister {
    async fn list(&self) -> Result<Vec<String>, ListerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.response.lock().unwrap().clone();
        response.ok_or_else(|| ListerError::ReadDir {
            path: PathBuf::from("/scripted"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "scripted failure"),
        })
    }
}
