use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::StoreResult;
use crate::features::tickets::models::{NewTicket, Ticket};

/// Data-store operations on the `tickets` table
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn insert(&self, ticket: NewTicket) -> StoreResult<Ticket>;

    /// Tickets for `dni`, newest first.
    async fn list_by_dni(&self, dni: &str) -> StoreResult<Vec<Ticket>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> StoreResult<bool>;
}

pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn insert(&self, ticket: NewTicket) -> StoreResult<Ticket> {
        let row = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (nombre, fecha, hora, dni, mensaje)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nombre, fecha, hora, dni, mensaje, created_at, updated_at
            "#,
        )
        .bind(&ticket.nombre)
        .bind(ticket.fecha)
        .bind(&ticket.hora)
        .bind(&ticket.dni)
        .bind(&ticket.mensaje)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_by_dni(&self, dni: &str) -> StoreResult<Vec<Ticket>> {
        let rows = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, nombre, fecha, hora, dni, mensaje, created_at, updated_at
            FROM tickets
            WHERE dni = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(dni)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
