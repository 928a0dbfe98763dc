//! PostgreSQL implementation of token repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;

const TOKEN_COLUMNS: &str = "id, name, token_hash, user_id, created_at, last_used_at, revoked_at";

/// Token store backed by the `api_tokens` table.
///
/// Only HMAC digests are written; lookups go through the unique `token_hash` index.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_user_by_token(&self, token_hash: &str) -> Result<Option<Uuid>, AppError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT user_id
            FROM api_tokens
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| AppError::from(e).with_op("token.find_user"))
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE api_tokens
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| AppError::from(e).with_op("token.update_last_used"))?;

        Ok(())
    }

    async fn create_token(
        &self,
        name: &str,
        token_hash: &str,
        user_id: Uuid,
    ) -> Result<ApiToken, AppError> {
        let sql = format!(
            "INSERT INTO api_tokens (name, token_hash, user_id) VALUES ($1, $2, $3) \
             RETURNING {TOKEN_COLUMNS}"
        );
        sqlx::query_as::<_, ApiToken>(&sql)
            .bind(name)
            .bind(token_hash)
            .bind(user_id)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| AppError::from(e).with_op("token.create"))
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        let sql =
            format!("SELECT {TOKEN_COLUMNS} FROM api_tokens ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ApiToken>(&sql)
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(|e| AppError::from(e).with_op("token.list"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        let sql = format!("SELECT {TOKEN_COLUMNS} FROM api_tokens WHERE id = $1");
        sqlx::query_as::<_, ApiToken>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| AppError::from(e).with_op("token.find_by_id"))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        let sql = format!("SELECT {TOKEN_COLUMNS} FROM api_tokens WHERE name = $1");
        sqlx::query_as::<_, ApiToken>(&sql)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| AppError::from(e).with_op("token.find_by_name"))
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE api_tokens
            SET revoked_at = NOW()
            WHERE id = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| AppError::from(e).with_op("token.revoke"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Token not found or already revoked",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}
