//! Contact form and account-request review handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, RecordId};
use crate::features::submissions::dtos::{CreateSubmissionDto, SubmissionResponseDto};
use crate::features::submissions::services::SubmissionService;
use crate::shared::constants::{SUBMISSION_DELETED, SUBMISSION_FIELDS_REQUIRED, SUBMISSION_SENT};
use crate::shared::types::{ErrorResponse, MessageResponse, SuccessResponse};

/// Submit an account request
///
/// Public endpoint used by the contact form.
#[utoipa::path(
    post,
    path = "/api/contacto",
    request_body = CreateSubmissionDto,
    responses(
        (status = 200, description = "Request stored", body = SuccessResponse),
        (status = 400, description = "A field is missing or empty", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "submissions"
)]
pub async fn create_submission(
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<CreateSubmissionDto>,
) -> Result<Json<SuccessResponse>> {
    dto.validate().map_err(|e| {
        tracing::debug!("Invalid contact form: {}", e);
        AppError::Validation(SUBMISSION_FIELDS_REQUIRED.to_string())
    })?;

    service.create(dto).await?;

    Ok(Json(SuccessResponse::with_message(SUBMISSION_SENT)))
}

/// List all account requests
#[utoipa::path(
    get,
    path = "/api/solicitudes",
    responses(
        (status = 200, description = "All account requests", body = Vec<SubmissionResponseDto>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "submissions"
)]
pub async fn list_submissions(
    State(service): State<Arc<SubmissionService>>,
) -> Result<Json<Vec<SubmissionResponseDto>>> {
    let submissions = service.list().await?;
    Ok(Json(submissions))
}

/// Delete an account request by id
#[utoipa::path(
    delete,
    path = "/api/solicitudes/{id}",
    params(
        ("id" = i32, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Request deleted", body = MessageResponse),
        (status = 404, description = "Request not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "submissions"
)]
pub async fn delete_submission(
    State(service): State<Arc<SubmissionService>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new(SUBMISSION_DELETED)))
}
