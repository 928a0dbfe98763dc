//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`            - Health check: DB and cache (public)
//! - `/api/v1/status/*`        - Status API (writes require a Bearer token)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Global request deadline; in-flight queries are dropped on expiry
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token resolved to a caller identity
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, Quota};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

fn rate_limited(router: Router<AppState>, quota: Quota, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(rate_limit::proxied_layer(quota))
    } else {
        router.layer(rate_limit::direct_layer(quota))
    }
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `request_timeout` - deadline after which a request is answered with `408`
pub fn app_router(
    state: AppState,
    behind_proxy: bool,
    request_timeout: Duration,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, behind_proxy, request_timeout))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState, behind_proxy: bool, request_timeout: Duration) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let protected = rate_limited(protected, rate_limit::SECURE, behind_proxy);

    let public = rate_limited(api::routes::public_routes(), rate_limit::PUBLIC, behind_proxy);

    let api_router = Router::new().merge(protected).merge(public);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer())
}
