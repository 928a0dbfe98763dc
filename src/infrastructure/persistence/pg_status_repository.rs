//! PostgreSQL implementation of status repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewStatus, Status, StatusFilter, StatusList, UpdateStatus};
use crate::domain::pagination::PaginationQuery;
use crate::domain::repositories::StatusRepository;
use crate::error::AppError;

const STATUS_COLUMNS: &str = "id, created_by, updated_by, created_at, updated_at, deleted_at, \
                              name, description, active, order_number";

/// Optional equality predicates; `$n IS NULL` disables a predicate without
/// changing the query text, so filter values are always bound parameters.
const LIST_PREDICATES: &str = r#"
    deleted_at IS NULL
      AND ($1::text IS NULL OR name = $1)
      AND ($2::text IS NULL OR description = $2)
      AND ($3::boolean IS NULL OR active = $3)
      AND ($4::integer IS NULL OR order_number = $4)
"#;

const SEARCH_PREDICATES: &str = r#"
    deleted_at IS NULL
      AND (name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
"#;

/// PostgreSQL repository for the `status` table.
///
/// Uses soft delete: `deleted_at IS NOT NULL` means deleted, and such rows are
/// filtered out of every query.
pub struct PgStatusRepository {
    pool: Arc<PgPool>,
}

impl PgStatusRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn db_error(op: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::from(e).with_op(op)
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found("Status not found", json!({ "id": id }))
}

/// Escapes `LIKE` wildcards so the search text matches literally.
pub(crate) fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl StatusRepository for PgStatusRepository {
    async fn create(&self, owner: Uuid, new_status: NewStatus) -> Result<Status, AppError> {
        let sql = format!(
            r#"
            INSERT INTO status (name, description, active, order_number, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {STATUS_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Status>(&sql)
            .bind(&new_status.name)
            .bind(&new_status.description)
            .bind(new_status.active)
            .bind(new_status.order_number)
            .bind(owner)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(db_error("status.create"))
    }

    async fn update(
        &self,
        id: Uuid,
        updater: Uuid,
        update: UpdateStatus,
    ) -> Result<Status, AppError> {
        let sql = format!(
            r#"
            UPDATE status SET
                description  = $1,
                active       = $2,
                order_number = $3,
                updated_by   = $4,
                updated_at   = NOW()
            WHERE id = $5 AND deleted_at IS NULL
            RETURNING {STATUS_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Status>(&sql)
            .bind(&update.description)
            .bind(update.active)
            .bind(update.order_number)
            .bind(updater)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(db_error("status.update"))?
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Status, AppError> {
        let sql = format!(
            r#"
            SELECT {STATUS_COLUMNS}
            FROM status
            WHERE id = $1 AND deleted_at IS NULL
            "#
        );

        sqlx::query_as::<_, Status>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(db_error("status.get_by_id"))?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE status SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await
        .map_err(db_error("status.delete"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Status not found or already deleted",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn list(
        &self,
        query: PaginationQuery,
        filter: StatusFilter,
    ) -> Result<StatusList, AppError> {
        let count_sql = format!("SELECT COUNT(*) FROM status WHERE {LIST_PREDICATES}");

        let total_count = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(filter.name.as_deref())
            .bind(filter.description.as_deref())
            .bind(filter.active)
            .bind(filter.order_number)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(db_error("status.list.count"))?;

        if total_count == 0 {
            return Ok(StatusList::empty(&query));
        }

        let page_sql = format!(
            "SELECT {STATUS_COLUMNS} FROM status WHERE {LIST_PREDICATES} \
             ORDER BY {} OFFSET $5 LIMIT $6",
            query.order().as_sql()
        );

        let items = sqlx::query_as::<_, Status>(&page_sql)
            .bind(filter.name.as_deref())
            .bind(filter.description.as_deref())
            .bind(filter.active)
            .bind(filter.order_number)
            .bind(query.offset())
            .bind(query.limit())
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(db_error("status.list.page"))?;

        Ok(StatusList::new(total_count, &query, items))
    }

    async fn search_by_text(
        &self,
        text: &str,
        query: PaginationQuery,
    ) -> Result<StatusList, AppError> {
        let pattern = escape_like(text);
        let count_sql = format!("SELECT COUNT(*) FROM status WHERE {SEARCH_PREDICATES}");

        let total_count = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(&pattern)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(db_error("status.search.count"))?;

        if total_count == 0 {
            return Ok(StatusList::empty(&query));
        }

        let page_sql = format!(
            "SELECT {STATUS_COLUMNS} FROM status WHERE {SEARCH_PREDICATES} \
             ORDER BY {} OFFSET $2 LIMIT $3",
            query.order().as_sql()
        );

        let items = sqlx::query_as::<_, Status>(&page_sql)
            .bind(&pattern)
            .bind(query.offset())
            .bind(query.limit())
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(db_error("status.search.page"))?;

        Ok(StatusList::new(total_count, &query, items))
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_text() {
        assert_eq!(escape_like("estimate"), "estimate");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_list_predicates_are_parameterized() {
        assert!(LIST_PREDICATES.contains("$1::text IS NULL OR name = $1"));
        assert!(LIST_PREDICATES.contains("$4::integer IS NULL OR order_number = $4"));
        assert!(!LIST_PREDICATES.contains('\''));
    }
}
