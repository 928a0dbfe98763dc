//! Bearer token authentication for write routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{domain::entities::Caller, error::AppError, state::AppState};

/// Resolves `Authorization: Bearer <token>` to a [`Caller`] and stores it in
/// the request extensions for the [`Caller`] extractor.
///
/// Missing or malformed headers, unknown tokens and revoked tokens all end in
/// `401` with `WWW-Authenticate: Bearer`. Handlers behind this layer never see
/// an anonymous request.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/status", post(create_status_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or not a Bearer token"}),
            )
        })?;

    let caller = state.auth_service.authenticate(&token).await?;
    tracing::debug!(user_id = %caller.user_id, "Request authenticated");
    parts.extensions.insert(caller);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
