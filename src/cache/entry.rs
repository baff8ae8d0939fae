//! Cache Entry Module
//!
//! Defines the single snapshot held by the image list cache.

use std::sync::Arc;

// == Cache Entry ==
/// The last successfully produced image list and when it was produced.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Root-relative image paths, in lister order
    pub items: Arc<Vec<String>>,
    /// Production timestamp (Unix milliseconds)
    pub produced_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry produced at `produced_at`.
    pub fn new(items: Arc<Vec<String>>, produced_at: u64) -> Self {
        Self { items, produced_at }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was produced.
    ///
    /// A clock that moved backwards yields an age of zero.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.produced_at)
    }

    // == Is Valid ==
    /// Checks whether the entry may answer a non-forced lookup.
    ///
    /// Boundary condition: an entry whose age equals the TTL is already stale.
    pub fn is_valid(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) < ttl_ms
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(produced_at: u64) -> CacheEntry {
        CacheEntry::new(Arc::new(vec!["/backgroundImages/a.png".to_string()]), produced_at)
    }

    #[test]
    fn test_entry_age() {
        let entry = entry(1_000);
        assert_eq!(entry.age_ms(1_000), 0);
        assert_eq!(entry.age_ms(4_500), 3_500);
    }

    #[test]
    fn test_entry_age_clock_regression() {
        let entry = entry(10_000);
        assert_eq!(entry.age_ms(5_000), 0);
        assert!(entry.is_valid(5_000, 1));
    }

    #[test]
    fn test_validity_boundary_condition() {
        let entry = entry(1_000);
        assert!(entry.is_valid(1_999, 1_000));
        assert!(!entry.is_valid(2_000, 1_000), "Entry should be stale at boundary");
        assert!(!entry.is_valid(50_000, 1_000));
    }
}
