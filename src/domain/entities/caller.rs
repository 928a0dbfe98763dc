//! Authenticated caller identity.

use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// The identity on whose behalf an operation runs.
///
/// Placed into request extensions by [`crate::api::middleware::auth::layer`],
/// extracted in handlers, and passed explicitly to every mutating [`crate::application::services::StatusService`]
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Uuid,
}

impl Caller {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    /// Rejects the nil identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if `user_id` is the nil UUID.
    pub fn ensure_identified(&self) -> Result<Uuid, AppError> {
        if self.user_id.is_nil() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "No caller identity"}),
            ));
        }
        Ok(self.user_id)
    }
}
