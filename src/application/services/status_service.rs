//! Status use cases with cache-aside reads.

use metrics::counter;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Caller, NewStatus, Status, StatusFilter, StatusList, UpdateStatus};
use crate::domain::pagination::PaginationQuery;
use crate::domain::repositories::StatusRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheError, CacheService};

/// Prefix of every status cache key.
pub const CACHE_KEY_PREFIX: &str = "api-status";

/// Default lifetime of a cached status.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

const METRIC_CACHE_HITS: &str = "status_cache_hits_total";
const METRIC_CACHE_MISSES: &str = "status_cache_misses_total";
const METRIC_CACHE_ERRORS: &str = "status_cache_errors_total";

/// Builds the cache key for a status id, e.g. `api-status:<uuid>`.
pub fn cache_key(id: Uuid) -> String {
    format!("{CACHE_KEY_PREFIX}:{id}")
}

/// Orchestrates status operations over the repository and the cache.
///
/// Reads by id go through the cache; list and search always hit the store.
/// Mutations write the store first and then invalidate the cached entry.
/// Cache failures are logged and never reach the caller.
pub struct StatusService<R: StatusRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
    enforce_ownership: bool,
}

impl<R: StatusRepository> StatusService<R> {
    /// Creates a new status service with ownership enforcement disabled.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, cache_ttl_seconds: u64) -> Self {
        Self {
            repository,
            cache,
            cache_ttl_seconds,
            enforce_ownership: false,
        }
    }

    /// Restricts update and delete to the status creator when `enabled`.
    pub fn with_ownership_enforcement(mut self, enabled: bool) -> Self {
        self.enforce_ownership = enabled;
        self
    }

    /// Creates a status owned by `caller`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] if the caller is anonymous
    /// - [`AppError::Validation`] if the input fails validation
    /// - [`AppError::Conflict`] / [`AppError::Internal`] from the store
    pub async fn create(&self, caller: Caller, input: NewStatus) -> Result<Status, AppError> {
        let owner = caller.ensure_identified()?;
        input.validate()?;

        let status = self.repository.create(owner, input).await?;
        debug!(id = %status.id, owner = %owner, "Status created");

        Ok(status)
    }

    /// Replaces the mutable content of a status and invalidates its cache entry.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] if the caller is anonymous
    /// - [`AppError::Validation`] if the input fails validation
    /// - [`AppError::NotFound`] if the status is missing or deleted
    /// - [`AppError::Forbidden`] if ownership is enforced and the caller is not the creator
    pub async fn update(
        &self,
        caller: Caller,
        id: Uuid,
        input: UpdateStatus,
    ) -> Result<Status, AppError> {
        let updater = caller.ensure_identified()?;
        input.validate()?;

        let existing = self.repository.get_by_id(id).await?;
        self.check_ownership(&existing, updater)?;

        let status = self.repository.update(id, updater, input).await?;
        self.invalidate(id).await;

        Ok(status)
    }

    /// Returns a status by id, serving from the cache when possible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the status is missing or deleted,
    /// and [`AppError::Internal`] on store failures.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Status, AppError> {
        let key = cache_key(id);

        match self.read_cached(&key).await {
            Ok(status) => {
                counter!(METRIC_CACHE_HITS).increment(1);
                return Ok(status);
            }
            Err(CacheError::Miss(_)) => {
                counter!(METRIC_CACHE_MISSES).increment(1);
            }
            Err(e) => {
                counter!(METRIC_CACHE_ERRORS).increment(1);
                warn!(key = %key, error = %e, "Cache read failed, falling back to database");
            }
        }

        let status = self.repository.get_by_id(id).await?;

        if let Err(e) = self.write_cached(&key, &status).await {
            counter!(METRIC_CACHE_ERRORS).increment(1);
            warn!(key = %key, error = %e, "Failed to populate cache");
        }

        Ok(status)
    }

    /// Soft-deletes a status and invalidates its cache entry.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] if the caller is anonymous
    /// - [`AppError::NotFound`] if the status is missing or already deleted
    /// - [`AppError::Forbidden`] if ownership is enforced and the caller is not the creator
    pub async fn delete(&self, caller: Caller, id: Uuid) -> Result<(), AppError> {
        let user_id = caller.ensure_identified()?;

        let existing = self.repository.get_by_id(id).await?;
        self.check_ownership(&existing, user_id)?;

        self.repository.delete(id).await?;
        self.invalidate(id).await;

        Ok(())
    }

    /// Returns one page of statuses matching `filter`. Not cached.
    pub async fn list(
        &self,
        query: PaginationQuery,
        filter: StatusFilter,
    ) -> Result<StatusList, AppError> {
        self.repository.list(query, filter).await
    }

    /// Returns one page of statuses whose name or description contains `text`. Not cached.
    pub async fn search_by_text(
        &self,
        text: &str,
        query: PaginationQuery,
    ) -> Result<StatusList, AppError> {
        self.repository.search_by_text(text, query).await
    }

    /// Checks database connectivity.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }

    fn check_ownership(&self, status: &Status, user_id: Uuid) -> Result<(), AppError> {
        if self.enforce_ownership && !status.is_owned_by(user_id) {
            return Err(AppError::forbidden(
                "Only the creator may modify this status",
                json!({ "id": status.id }),
            ));
        }
        Ok(())
    }

    async fn read_cached(&self, key: &str) -> Result<Status, CacheError> {
        let payload = self.cache.get(key).await?;
        serde_json::from_str(&payload).map_err(|source| CacheError::Serialization {
            op: "status.decode",
            source,
        })
    }

    async fn write_cached(&self, key: &str, status: &Status) -> Result<(), CacheError> {
        let payload = serde_json::to_string(status).map_err(|source| CacheError::Serialization {
            op: "status.encode",
            source,
        })?;
        self.cache.set(key, &payload, self.cache_ttl_seconds).await
    }

    async fn invalidate(&self, id: Uuid) {
        let key = cache_key(id);
        if let Err(e) = self.cache.delete(&key).await {
            counter!(METRIC_CACHE_ERRORS).increment(1);
            warn!(key = %key, error = %e, "Failed to invalidate cache entry");
        }
    }
}
