//! Cached Fetcher
//!
//! Read-through cache in front of the upstream client. Every upstream read in
//! the crate goes through [`CachedFetcher::fetch`].

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::cache::JsonCache;
use crate::error::{ProxyError, Result};
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct CachedFetcher {
    cache: Arc<JsonCache>,
    upstream: Arc<dyn UpstreamClient>,
}

impl CachedFetcher {
    pub fn new(cache: Arc<JsonCache>, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { cache, upstream }
    }

    pub fn cache(&self) -> &Arc<JsonCache> {
        &self.cache
    }

    // == Fetch ==
    /// Returns the document at `path`, from cache if younger than `ttl`.
    ///
    /// On a miss the upstream is queried and a successful result replaces the
    /// cached entry. A failed fetch is returned as-is and leaves the cache
    /// untouched.
    pub async fn fetch(&self, path: &str, ttl: Duration) -> Result<Arc<Value>> {
        if let Some(hit) = self.cache.get(path, ttl).await {
            debug!("Cache hit for {}", path);
            return Ok(hit);
        }

        debug!("Cache miss for {}", path);
        let value = Arc::new(self.upstream.fetch_json(path).await?);
        self.cache.set(path, value.clone()).await;
        Ok(value)
    }

    // == Fetch As ==
    /// Like [`fetch`](Self::fetch), then decodes into `T`.
    ///
    /// A document that doesn't match `T` is `UpstreamMalformed`. It has
    /// already been cached as valid JSON; the decode is repeated per read.
    pub async fn fetch_as<T: DeserializeOwned>(&self, path: &str, ttl: Duration) -> Result<T> {
        let value = self.fetch(path, ttl).await?;
        T::deserialize(value.as_ref()).map_err(|e| ProxyError::UpstreamMalformed {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
