use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::RejectedBody;
use crate::features::accounts::models::Account;
use crate::shared::constants::{INVALID_CREDENTIALS, REGISTER_FAILED};

/// Request DTO for account registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterAccountDto {
    #[validate(required, length(min = 1, message = "username is required"))]
    pub username: Option<String>,

    #[validate(required, length(min = 1, message = "password is required"))]
    pub password: Option<String>,

    pub email: Option<String>,

    /// Sent by older clients; accepted and ignored.
    pub nombre: Option<String>,
}

impl RejectedBody for RegisterAccountDto {
    fn rejected_body() -> AppError {
        AppError::Validation(REGISTER_FAILED.to_string())
    }
}

/// Request DTO for login. Missing fields deserialize as empty strings, which
/// never match a registered account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl RejectedBody for LoginDto {
    fn rejected_body() -> AppError {
        AppError::Unauthorized(INVALID_CREDENTIALS.to_string())
    }
}

/// Account as returned by register and the accounts listing.
///
/// `password` is the stored credential. Exposing it is a known weakness of the
/// existing API that clients still rely on.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponseDto {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponseDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            username: a.username,
            password: a.password,
            email: a.email,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
