//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AuthService, StatusService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{PgStatusRepository, PgTokenRepository};

/// State injected into every handler.
///
/// Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub status_service: Arc<StatusService<PgStatusRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    pub cache: Arc<dyn CacheService>,
}

/// Settings for building [`AppState`].
#[derive(Debug, Clone)]
pub struct StateOptions {
    pub signing_secret: String,
    pub cache_ttl_seconds: u64,
    pub enforce_ownership: bool,
}

impl AppState {
    /// Wires repositories and services over a shared pool and cache.
    pub fn new(pool: Arc<PgPool>, cache: Arc<dyn CacheService>, options: StateOptions) -> Self {
        let status_repository = Arc::new(PgStatusRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool));

        let status_service = StatusService::new(
            status_repository,
            cache.clone(),
            options.cache_ttl_seconds,
        )
        .with_ownership_enforcement(options.enforce_ownership);

        Self {
            status_service: Arc::new(status_service),
            auth_service: Arc::new(AuthService::new(token_repository, options.signing_secret)),
            cache,
        }
    }
}
