use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an account request (`solicitudes` table)
#[derive(Debug, Clone, FromRow)]
pub struct Submission {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}
