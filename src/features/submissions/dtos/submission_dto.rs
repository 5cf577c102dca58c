use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::RejectedBody;
use crate::features::submissions::models::Submission;
use crate::shared::constants::SUBMISSION_FIELDS_REQUIRED;

/// Request DTO for the contact form. All three fields must be present and
/// non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSubmissionDto {
    #[validate(required, length(min = 1))]
    pub nombre: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub mensaje: Option<String>,
}

impl RejectedBody for CreateSubmissionDto {
    fn rejected_body() -> AppError {
        AppError::Validation(SUBMISSION_FIELDS_REQUIRED.to_string())
    }
}

/// Response DTO for an account request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponseDto {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponseDto {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            nombre: s.nombre,
            email: s.email,
            mensaje: s.mensaje,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
