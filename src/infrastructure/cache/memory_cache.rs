//! In-process cache with per-entry expiry and a bounded entry count.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use tracing::debug;

/// Capacity used by [`MemoryCache::new`].
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// An LRU cache local to one process.
///
/// Suitable for single-instance deployments and tests. Once `capacity` entries
/// are held, the least recently used one is evicted. Expired entries are
/// dropped when read and swept on every write.
pub struct MemoryCache {
    entries: RwLock<LruCache<String, Entry>>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// A zero capacity is clamped to one entry.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        debug!(capacity = capacity.get(), "Using MemoryCache");
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Number of entries currently held, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }
}

fn purge_expired(entries: &mut LruCache<String, Entry>, now: Instant) -> usize {
    let expired: Vec<String> = entries
        .iter()
        .filter(|(_, entry)| entry.expires_at <= now)
        .map(|(key, _)| key.clone())
        .collect();

    for key in &expired {
        entries.pop(key);
    }
    expired.len()
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<String> {
        // `LruCache::get` bumps recency, so reads take the write lock.
        let mut entries = self.entries.write().await;
        let live = entries
            .get(key)
            .map(|entry| (entry.expires_at > Instant::now()).then(|| entry.value.clone()));

        match live {
            Some(Some(value)) => Ok(value),
            Some(None) => {
                entries.pop(key);
                Err(CacheError::Miss(key.to_string()))
            }
            None => Err(CacheError::Miss(key.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(ttl_seconds))
            .ok_or_else(|| CacheError::Backend {
                op: "memory.set",
                message: format!("ttl of {ttl_seconds}s is out of range"),
            })?;

        let mut entries = self.entries.write().await;
        let purged = purge_expired(&mut entries, now);
        if purged > 0 {
            debug!(purged, "Swept expired cache entries");
        }
        entries.put(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.write().await.pop(key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
