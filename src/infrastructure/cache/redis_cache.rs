//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache implementation.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Backend failures are returned to the caller tagged with the operation name;
/// the status service decides how to degrade.
pub struct RedisCache {
    client: ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }
}

fn backend_error(op: &'static str, e: redis::RedisError) -> CacheError {
    CacheError::Backend {
        op,
        message: e.to_string(),
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<String> {
        let mut conn = self.client.clone();

        match conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| backend_error("redis.get", e))?
        {
            Some(value) => {
                debug!(key, "Redis HIT");
                Ok(value)
            }
            None => {
                debug!(key, "Redis MISS");
                Err(CacheError::Miss(key.to_string()))
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(|e| backend_error("redis.set_ex", e))?;

        debug!(key, ttl_seconds, "Redis SET");
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.client.clone();

        let deleted = conn
            .del::<_, i64>(key)
            .await
            .map_err(|e| backend_error("redis.del", e))?;

        if deleted > 0 {
            debug!(key, "Redis DEL");
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
