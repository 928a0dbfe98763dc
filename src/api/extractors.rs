//! Extractors for values placed on the request by middleware.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::json;

use crate::{domain::entities::Caller, error::AppError};

/// Reads the [`Caller`] attached by [`crate::api::middleware::auth::layer`].
///
/// A route that extracts `Caller` without the auth layer in front of it
/// rejects every request with `401`.
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Caller>().copied().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "No caller identity attached to request"}),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_caller_read_from_extensions() {
        let caller = Caller::new(Uuid::new_v4());
        let mut request = axum::http::Request::new(());
        request.extensions_mut().insert(caller);
        let (mut parts, _) = request.into_parts();

        let extracted = Caller::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, caller);
    }

    #[tokio::test]
    async fn test_missing_caller_is_unauthorized() {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();

        let result = Caller::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
