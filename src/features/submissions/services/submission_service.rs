//! Submission Service - stores contact-form requests for later review

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::submissions::dtos::{CreateSubmissionDto, SubmissionResponseDto};
use crate::features::submissions::models::NewSubmission;
use crate::features::submissions::repositories::SubmissionRepository;
use crate::shared::constants::{
    DELETE_SUBMISSION_FAILED, LIST_SUBMISSIONS_FAILED, SAVE_SUBMISSION_FAILED,
    SUBMISSION_FIELDS_REQUIRED, SUBMISSION_NOT_FOUND,
};

pub struct SubmissionService {
    repository: Arc<dyn SubmissionRepository>,
}

impl SubmissionService {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, dto: CreateSubmissionDto) -> Result<SubmissionResponseDto> {
        let (Some(nombre), Some(email), Some(mensaje)) = (dto.nombre, dto.email, dto.mensaje)
        else {
            return Err(AppError::Validation(SUBMISSION_FIELDS_REQUIRED.to_string()));
        };

        let submission = self
            .repository
            .insert(NewSubmission {
                nombre,
                email,
                mensaje,
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to save submission: {:?}", e);
                AppError::Internal(SAVE_SUBMISSION_FAILED.to_string())
            })?;

        tracing::info!(
            "Submission saved: id={}, email={}",
            submission.id,
            submission.email
        );

        Ok(submission.into())
    }

    pub async fn list(&self) -> Result<Vec<SubmissionResponseDto>> {
        let submissions = self.repository.list().await.map_err(|e| {
            tracing::error!("Failed to list submissions: {:?}", e);
            AppError::Internal(LIST_SUBMISSIONS_FAILED.to_string())
        })?;

        Ok(submissions.into_iter().map(|s| s.into()).collect())
    }

    /// `None` is an id that could not be parsed
    pub async fn delete(&self, id: Option<i32>) -> Result<()> {
        let Some(id) = id else {
            return Err(AppError::NotFound(SUBMISSION_NOT_FOUND.to_string()));
        };

        let deleted = self.repository.delete(id).await.map_err(|e| {
            tracing::error!("Failed to delete submission {}: {:?}", id, e);
            AppError::Internal(DELETE_SUBMISSION_FAILED.to_string())
        })?;

        if !deleted {
            return Err(AppError::NotFound(SUBMISSION_NOT_FOUND.to_string()));
        }

        tracing::info!("Submission deleted: id={}", id);
        Ok(())
    }
}
