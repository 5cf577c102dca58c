use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::StoreResult;
use crate::features::submissions::models::{NewSubmission, Submission};

/// Data-store operations on the `solicitudes` table
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn insert(&self, submission: NewSubmission) -> StoreResult<Submission>;

    async fn list(&self) -> StoreResult<Vec<Submission>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> StoreResult<bool>;
}

pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn insert(&self, submission: NewSubmission) -> StoreResult<Submission> {
        let row = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO solicitudes (nombre, email, mensaje)
            VALUES ($1, $2, $3)
            RETURNING id, nombre, email, mensaje, created_at, updated_at
            "#,
        )
        .bind(&submission.nombre)
        .bind(&submission.email)
        .bind(&submission.mensaje)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> StoreResult<Vec<Submission>> {
        let rows = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, nombre, email, mensaje, created_at, updated_at
            FROM solicitudes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM solicitudes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
