//! `GET /health`

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Checks the database and the cache backend concurrently.
///
/// Answers `200` with `"status": "healthy"` when both respond, otherwise
/// `503` with `"status": "degraded"` and the failing check marked `error`.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "cache": { "status": "ok", "message": "redis reachable" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (database, cache) = tokio::join!(check_database(&state), check_cache(&state));

    let healthy = database.is_ok() && cache.is_ok();
    if !healthy {
        tracing::warn!(?database, ?cache, "Health check degraded");
    }

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status: if healthy { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks: HealthChecks { database, cache },
        }),
    )
}

async fn check_database(state: &AppState) -> CheckStatus {
    if state.status_service.health_check().await {
        CheckStatus::ok("Connected")
    } else {
        CheckStatus::error("Database unreachable")
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if state.cache.health_check().await {
        CheckStatus::ok(format!("{backend} reachable"))
    } else {
        CheckStatus::error(format!("{backend} unreachable"))
    }
}
