use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for ticket
#[derive(Debug, Clone, FromRow)]
pub struct Ticket {
    pub id: i32,
    pub nombre: String,
    pub fecha: NaiveDate,
    pub hora: String,
    pub dni: String,
    pub mensaje: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for inserting a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub nombre: String,
    pub fecha: NaiveDate,
    pub hora: String,
    pub dni: String,
    pub mensaje: String,
}
