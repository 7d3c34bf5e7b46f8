//! Cache Statistics Module
//!
//! Tracks cache hits and misses.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache performance counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of lookups served from cache
    pub hits: u64,
    /// Number of lookups that found no entry or a stale one
    pub misses: u64,
    /// Current number of stored entries, fresh or stale
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    pub fn new(hits: u64, misses: u64, total_entries: usize) -> Self {
        Self {
            hits,
            misses,
            total_entries,
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
