//! API route configuration.
//!
//! Mutating endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`]; reads are public.

use crate::api::handlers::{
    create_status_handler, delete_status_handler, get_status_handler, list_status_handler,
    search_status_handler, update_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Status routes that require an authenticated caller.
///
/// # Endpoints
///
/// - `POST   /status`        - Create a status
/// - `PUT    /status/{id}`   - Update a status
/// - `DELETE /status/{id}`   - Soft-delete a status
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/status", post(create_status_handler))
        .route(
            "/status/{id}",
            put(update_status_handler).delete(delete_status_handler),
        )
}

/// Public read-only status routes.
///
/// # Endpoints
///
/// - `GET /status`          - List statuses (paginated, filterable)
/// - `GET /status/search`   - Text search over name and description
/// - `GET /status/{id}`     - Get a status by id
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(list_status_handler))
        .route("/status/search", get(search_status_handler))
        .route("/status/{id}", get(get_status_handler))
}
