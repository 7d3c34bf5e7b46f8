//! Cache Store Module
//!
//! Keyed store of timestamped values with per-read TTL and lazy expiry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats};

/// Cache of upstream JSON documents keyed by request path.
pub type JsonCache = TtlCache<Arc<Value>>;

// == TTL Cache ==
/// Shared cache mapping string keys to timestamped values.
///
/// The map sits behind a `RwLock` and entries are replaced wholesale, so a
/// reader always sees a complete entry, either the old one or the new one.
/// Stale entries are never removed; they are simply ignored on lookup until
/// the next successful write replaces them.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // == Get ==
    /// Returns the value for `key` if it was stored less than `ttl` ago.
    ///
    /// A missing entry and a stale entry both read as `None`. The stale entry
    /// stays in place.
    pub async fn get(&self, key: &str, ttl: Duration) -> Option<V> {
        let entries = self.entries.read().await;
        // Clock is read only once the lock is held
        self.lookup(&entries, key, ttl, current_timestamp_ms())
    }

    /// Same as [`get`](Self::get) with an explicit clock reading.
    pub async fn get_at(&self, key: &str, ttl: Duration, now_ms: u64) -> Option<V> {
        let entries = self.entries.read().await;
        self.lookup(&entries, key, ttl, now_ms)
    }

    fn lookup(
        &self,
        entries: &HashMap<String, CacheEntry<V>>,
        key: &str,
        ttl: Duration,
        now_ms: u64,
    ) -> Option<V> {
        match entries.get(key) {
            Some(entry) if entry.is_fresh_at(ttl, now_ms) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// Any previous entry for the key is overwritten.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.set_at(key, value, current_timestamp_ms()).await;
    }

    /// Same as [`set`](Self::set) with an explicit store timestamp.
    pub async fn set_at(&self, key: impl Into<String>, value: V, stored_at: u64) {
        let entry = CacheEntry::stored_at(value, stored_at);
        self.entries.write().await.insert(key.into(), entry);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        CacheStats::new(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.len().await,
        )
    }

    // == Length ==
    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
