//! Repository trait for status data access.

use crate::domain::entities::{NewStatus, Status, StatusFilter, StatusList, UpdateStatus};
use crate::domain::pagination::PaginationQuery;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for the `status` table.
///
/// Every read excludes soft-deleted rows. Storage failures are returned as
/// [`AppError::Internal`] tagged with the originating operation name.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatusRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_status.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Inserts a new status owned by `owner`.
    ///
    /// `owner` is written to both `created_by` and `updated_by`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a unique constraint violation.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, owner: Uuid, new_status: NewStatus) -> Result<Status, AppError>;

    /// Replaces description, active flag and order number of a live status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live row has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: Uuid,
        updater: Uuid,
        update: UpdateStatus,
    ) -> Result<Status, AppError>;

    /// Fetches a live status by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown or soft-deleted.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_id(&self, id: Uuid) -> Result<Status, AppError>;

    /// Soft-deletes a status by setting `deleted_at = NOW()`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live row was affected.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Lists live statuses matching `filter`, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        query: PaginationQuery,
        filter: StatusFilter,
    ) -> Result<StatusList, AppError>;

    /// Case-insensitive substring search over name and description.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search_by_text(
        &self,
        text: &str,
        query: PaginationQuery,
    ) -> Result<StatusList, AppError>;

    /// Checks that the store answers queries.
    async fn health_check(&self) -> bool;
}
