use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, RecordId};
use crate::features::accounts::dtos::{AccountResponseDto, LoginDto, RegisterAccountDto};
use crate::features::accounts::services::AccountService;
use crate::shared::constants::{ACCOUNT_DELETED, REGISTER_FAILED};
use crate::shared::types::{ErrorResponse, MessageResponse, SuccessResponse};

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterAccountDto,
    responses(
        (status = 200, description = "Account created", body = AccountResponseDto),
        (status = 400, description = "Username taken or invalid input", body = ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn register(
    State(service): State<Arc<AccountService>>,
    AppJson(dto): AppJson<RegisterAccountDto>,
) -> Result<Json<AccountResponseDto>> {
    dto.validate().map_err(|e| {
        tracing::debug!("Invalid registration: {}", e);
        AppError::Validation(REGISTER_FAILED.to_string())
    })?;

    let account = service.register(dto).await?;
    Ok(Json(account))
}

/// Check a username/password pair
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials match", body = SuccessResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn login(
    State(service): State<Arc<AccountService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<Json<SuccessResponse>> {
    service.login(dto).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// List all accounts
///
/// The response includes each account's stored password.
#[utoipa::path(
    get,
    path = "/api/usuarios",
    responses(
        (status = 200, description = "All accounts", body = Vec<AccountResponseDto>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn list_accounts(
    State(service): State<Arc<AccountService>>,
) -> Result<Json<Vec<AccountResponseDto>>> {
    let accounts = service.list().await?;
    Ok(Json(accounts))
}

/// Delete an account by id
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn delete_account(
    State(service): State<Arc<AccountService>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new(ACCOUNT_DELETED)))
}
