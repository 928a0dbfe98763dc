//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// None of these ever reach an HTTP client: callers log them and fall back to
/// the database.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The key is absent or expired.
    #[error("cache miss: {0}")]
    Miss(String),

    #[error("cache connection error: {0}")]
    Connection(String),

    /// The backend rejected or failed a command.
    #[error("{op}: {message}")]
    Backend { op: &'static str, message: String },

    /// A cached payload could not be encoded or decoded.
    #[error("{op}: {source}")]
    Serialization {
        op: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CacheError {
    /// Returns true for a plain miss, as opposed to a backend failure.
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Miss(_))
    }
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value cache with per-entry expiry.
///
/// Values are opaque UTF-8 payloads (JSON in practice). The cache is an
/// optimization only; it is never the source of truth.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map with expiry
/// - [`crate::infrastructure::cache::NullCache`] - Always misses
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Miss`] if the key is absent or expired, and other
    /// variants if the backend fails.
    async fn get(&self, key: &str) -> CacheResult<String>;

    /// Stores `value` under `key` for `ttl_seconds`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Removes `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reporting.
    fn backend(&self) -> &'static str;
}
