use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::StoreResult;
use crate::features::accounts::models::{Account, NewAccount};

/// Data-store operations on the `usuarios` table. Every method is one
/// statement; the store provides isolation.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, account: NewAccount) -> StoreResult<Account>;

    /// Exact match on both columns.
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<Account>>;

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<Account>>;

    async fn list(&self) -> StoreResult<Vec<Account>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> StoreResult<bool>;
}

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn insert(&self, account: NewAccount) -> StoreResult<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO usuarios (username, password, email)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, email, created_at, updated_at
            "#,
        )
        .bind(&account.username)
        .bind(&account.password)
        .bind(&account.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, password, email, created_at, updated_at
            FROM usuarios
            WHERE username = $1 AND password = $2
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, password, email, created_at, updated_at
            FROM usuarios
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, password, email, created_at, updated_at
            FROM usuarios
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
