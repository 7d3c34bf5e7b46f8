//! Cache Module
//!
//! Provides a shared in-memory store with per-read TTL and lazy expiry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::{JsonCache, TtlCache};
