//! No-op cache implementation for disabled caching.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache that stores nothing.
///
/// Every `get` is a miss; `set` and `delete` succeed immediately. Used when
/// caching is disabled or Redis is unreachable at startup, so every read goes
/// to the database.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, key: &str) -> CacheResult<String> {
        Err(CacheError::Miss(key.to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: u64) -> CacheResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_always_misses() {
        let cache = NullCache::new();
        cache.set("k", "v", 60).await.unwrap();

        let result = cache.get("k").await;
        assert!(result.unwrap_err().is_miss());
        assert!(cache.delete("k").await.is_ok());
        assert!(cache.health_check().await);
    }
}
