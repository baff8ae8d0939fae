//! Cache Store Module
//!
//! Single-slot image list cache with TTL refresh, forced bypass and
//! fail-soft fallback to the last good listing.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{
    CacheEntry, Clock, SystemClock, CACHE_CONTROL_FRESH, CACHE_CONTROL_NO_STORE, TTL_MS,
};
use crate::listing::ImageLister;

// == Lookup Outcome ==
/// How a lookup was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Served from a valid entry without calling the lister
    Hit,
    /// The lister succeeded and replaced the entry
    Refreshed,
    /// The lister failed; the previous entry was served, stale or not
    Fallback,
    /// The lister failed and there was nothing to fall back to
    Empty,
}

impl LookupOutcome {
    /// Cache-Control directive for responses carrying this outcome.
    ///
    /// Failure paths are never cacheable by intermediaries.
    pub fn cache_control(self) -> &'static str {
        match self {
            LookupOutcome::Hit | LookupOutcome::Refreshed => CACHE_CONTROL_FRESH,
            LookupOutcome::Fallback | LookupOutcome::Empty => CACHE_CONTROL_NO_STORE,
        }
    }
}

// == Cache Lookup ==
/// Result of [`ImageListCache::get`]: the listing plus how it was produced.
#[derive(Debug, Clone)]
pub struct CacheLookup {
    items: Arc<Vec<String>>,
    outcome: LookupOutcome,
}

impl CacheLookup {
    fn new(items: Arc<Vec<String>>, outcome: LookupOutcome) -> Self {
        Self { items, outcome }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn outcome(&self) -> LookupOutcome {
        self.outcome
    }

    pub fn cache_control(&self) -> &'static str {
        self.outcome.cache_control()
    }
}

// == Image List Cache ==
/// Process-wide cache of the background image listing.
///
/// The lock is held only to read or swap the slot, never across the lister
/// call, so concurrent misses may each scan the directory.
pub struct ImageListCache {
    /// The single cached snapshot, None until the first successful scan
    slot: RwLock<Option<CacheEntry>>,
    lister: Arc<dyn ImageLister>,
    clock: Arc<dyn Clock>,
    /// Validity window in milliseconds
    ttl_ms: u64,
}

impl ImageListCache {
    // == Constructor ==
    /// Creates an empty cache over `lister` using the system clock.
    pub fn new(lister: Arc<dyn ImageLister>) -> Self {
        Self::with_clock(lister, Arc::new(SystemClock))
    }

    /// Creates an empty cache with an explicit clock.
    pub fn with_clock(lister: Arc<dyn ImageLister>, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            lister,
            clock,
            ttl_ms: TTL_MS,
        }
    }

    // == Get ==
    /// Returns the current listing.
    ///
    /// A valid entry answers directly unless `force_refresh` is set.
    /// Otherwise the lister runs; on success its output replaces the entry,
    /// on failure the existing entry (or an empty list) is returned and the
    /// slot is left untouched. Never fails.
    pub async fn get(&self, force_refresh: bool) -> CacheLookup {
        let now = self.clock.now_ms();

        if !force_refresh {
            let slot = self.slot.read().await;
            if let Some(entry) = slot.as_ref().filter(|e| e.is_valid(now, self.ttl_ms)) {
                debug!(
                    "Image list cache hit: {} items, age {}ms",
                    entry.items.len(),
                    entry.age_ms(now)
                );
                return CacheLookup::new(Arc::clone(&entry.items), LookupOutcome::Hit);
            }
        }

        match self.lister.list().await {
            Ok(items) => {
                let items = Arc::new(items);
                info!(
                    "Image list refreshed: {} items (forced: {})",
                    items.len(),
                    force_refresh
                );
                self.store(CacheEntry::new(Arc::clone(&items), now)).await;
                CacheLookup::new(items, LookupOutcome::Refreshed)
            }
            Err(err) => {
                let slot = self.slot.read().await;
                match slot.as_ref() {
                    Some(entry) => {
                        warn!(
                            error = %err,
                            "Image list refresh failed, serving previous listing (age {}ms)",
                            entry.age_ms(now)
                        );
                        CacheLookup::new(Arc::clone(&entry.items), LookupOutcome::Fallback)
                    }
                    None => {
                        warn!(error = %err, "Image list refresh failed with nothing cached");
                        CacheLookup::new(Arc::new(Vec::new()), LookupOutcome::Empty)
                    }
                }
            }
        }
    }

    // == Entry ==
    /// Returns a snapshot of the cached entry, if any.
    pub async fn entry(&self) -> Option<CacheEntry> {
        self.slot.read().await.clone()
    }

    /// Replaces the slot unless it already holds a newer listing.
    async fn store(&self, entry: CacheEntry) {
        let mut slot = self.slot.write().await;
        match slot.as_ref() {
            Some(current) if current.produced_at > entry.produced_at => {
                debug!(
                    "Discarding refresh started at {} in favour of newer listing from {}",
                    entry.produced_at, current.produced_at
                );
            }
            _ => *slot = Some(entry),
        }
    }
}
