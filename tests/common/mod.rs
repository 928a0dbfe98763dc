#![allow(dead_code)]

use axum::{Extension, Router};
use axum_test::TestServer;
use sqlx::PgPool;
use status_service::application::services::hash_token;
use status_service::domain::entities::Caller;
use status_service::infrastructure::cache::{CacheService, MemoryCache};
use status_service::routes::router;
use status_service::state::{AppState, StateOptions};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn test_options(enforce_ownership: bool) -> StateOptions {
    StateOptions {
        signing_secret: TEST_SECRET.to_string(),
        cache_ttl_seconds: 60,
        enforce_ownership,
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_cache(pool, Arc::new(MemoryCache::new()), false)
}

pub fn create_test_state_with_cache(
    pool: PgPool,
    cache: Arc<dyn CacheService>,
    enforce_ownership: bool,
) -> AppState {
    AppState::new(Arc::new(pool), cache, test_options(enforce_ownership))
}

/// Inserts an API token for `user_id` and returns the raw bearer value.
pub async fn create_test_token(pool: &PgPool, name: &str, user_id: Uuid) -> String {
    let raw = format!("token-{name}");
    sqlx::query("INSERT INTO api_tokens (name, token_hash, user_id) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(hash_token(TEST_SECRET, &raw))
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
    raw
}

pub async fn create_test_status(
    pool: &PgPool,
    owner: Uuid,
    name: &str,
    description: &str,
    active: bool,
    order_number: i32,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO status (name, description, active, order_number, created_by, updated_by) \
         VALUES ($1, $2, $3, $4, $5, $5) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .bind(active)
    .bind(order_number)
    .bind(owner)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_deleted_status(pool: &PgPool, owner: Uuid, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO status (name, description, created_by, updated_by, deleted_at) \
         VALUES ($1, 'deleted', $2, $2, NOW()) RETURNING id",
    )
    .bind(name)
    .bind(owner)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Full application router, including authentication and rate limiting.
pub fn make_app_server(state: AppState) -> TestServer {
    let app = router(state, true, Duration::from_secs(5));
    TestServer::new(app).unwrap()
}

/// Router with the caller injected directly, bypassing token lookup.
pub fn make_server_as(routes: Router<AppState>, state: AppState, caller: Caller) -> TestServer {
    let app = routes.layer(Extension(caller)).with_state(state);
    TestServer::new(app).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Client address read by the proxy-aware rate limiter.
pub const CLIENT_IP: &str = "203.0.113.7";
