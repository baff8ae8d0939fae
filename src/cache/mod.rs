//! Cache Module
//!
//! Single-slot, time-boxed cache in front of the background image lister.
//! Lister failures are absorbed and answered with the last good listing.

mod clock;
mod entry;
mod store;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
pub(crate) mod test_support;

// Re-export public types
pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub(crate) use clock::ManualClock;
pub use entry::CacheEntry;
pub use store::{CacheLookup, ImageListCache, LookupOutcome};

// == Public Constants ==
/// Age after which a listing is refreshed on the next lookup
pub const TTL_MS: u64 = 24 * 60 * 60 * 1000; // 24h

/// Cache-Control sent with fresh listings
pub const CACHE_CONTROL_FRESH: &str = "public, max-age=300, stale-while-revalidate=600";

/// Cache-Control sent whenever the lister failed
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";
