use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an account (`usuarios` table)
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i32,
    pub username: String,
    /// Stored credential: the raw password or an Argon2 PHC string,
    /// depending on `PASSWORD_STORAGE`.
    pub password: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for inserting an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}
