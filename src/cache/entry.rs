//! Cache Entry Module
//!
//! Defines a stored value stamped with the wall-clock time it was written.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cache entry: the value and when it was stored.
///
/// Entries carry no TTL of their own. Freshness is decided by the reader,
/// so the same entry can be fresh for one caller and stale for another.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Store timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry with an explicit store timestamp.
    pub fn stored_at(value: V, stored_at: u64) -> Self {
        Self { value, stored_at }
    }

    // == Age ==
    /// Milliseconds elapsed between storing and `now_ms`.
    ///
    /// A clock that moved backwards yields an age of zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still usable under `ttl` at `now_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale. Only
    /// `age < ttl` counts as fresh, so a zero TTL never serves from cache.
    pub fn is_fresh_at(&self, ttl: Duration, now_ms: u64) -> bool {
        u128::from(self.age_ms(now_ms)) < ttl.as_millis()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
