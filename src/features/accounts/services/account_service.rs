use std::sync::Arc;

use crate::core::config::PasswordStorage;
use crate::core::error::{AppError, Result, StoreResult};
use crate::features::accounts::dtos::{AccountResponseDto, LoginDto, RegisterAccountDto};
use crate::features::accounts::models::{Account, NewAccount};
use crate::features::accounts::repositories::AccountRepository;
use crate::features::accounts::services::PasswordService;
use crate::shared::constants::{
    ACCOUNT_NOT_FOUND, DELETE_ACCOUNT_FAILED, INTERNAL_ERROR, INVALID_CREDENTIALS,
    LIST_ACCOUNTS_FAILED, REGISTER_FAILED,
};

/// Service for account operations
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    passwords: PasswordService,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>, password_storage: PasswordStorage) -> Self {
        Self {
            repository,
            passwords: PasswordService::new(password_storage),
        }
    }

    /// Register a new account. Any store failure, duplicate usernames
    /// included, is reported to the caller as the same 400.
    pub async fn register(&self, dto: RegisterAccountDto) -> Result<AccountResponseDto> {
        let (Some(username), Some(password)) = (dto.username, dto.password) else {
            return Err(AppError::Validation(REGISTER_FAILED.to_string()));
        };

        let password = self.passwords.prepare(&password).map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            AppError::Internal(INTERNAL_ERROR.to_string())
        })?;

        let account = self
            .repository
            .insert(NewAccount {
                username,
                password,
                email: dto.email,
            })
            .await
            .map_err(|e| {
                if e.is_constraint_violation() {
                    tracing::warn!("Registration rejected: {}", e);
                } else {
                    tracing::error!("Failed to register account: {:?}", e);
                }
                AppError::Conflict(REGISTER_FAILED.to_string())
            })?;

        tracing::info!(
            "Account registered: id={}, username={}",
            account.id,
            account.username
        );

        Ok(account.into())
    }

    /// Check a username/password pair against the stored accounts
    pub async fn login(&self, dto: LoginDto) -> Result<()> {
        let account = self.find_matching(&dto.username, &dto.password).await.map_err(|e| {
            tracing::error!("Failed to look up credentials: {:?}", e);
            AppError::Internal(INTERNAL_ERROR.to_string())
        })?;

        match account {
            Some(account) => {
                tracing::info!("Login succeeded: id={}", account.id);
                Ok(())
            }
            None => {
                tracing::info!("Login failed for username={}", dto.username);
                Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    async fn find_matching(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<Account>> {
        match self.passwords.storage() {
            PasswordStorage::Plaintext => {
                self.repository
                    .find_by_credentials(username, password)
                    .await
            }
            PasswordStorage::Argon2 => Ok(self
                .repository
                .find_by_username(username)
                .await?
                .filter(|account| self.passwords.verify(password, &account.password))),
        }
    }

    /// List every account, stored credentials included
    pub async fn list(&self) -> Result<Vec<AccountResponseDto>> {
        let accounts = self.repository.list().await.map_err(|e| {
            tracing::error!("Failed to list accounts: {:?}", e);
            AppError::Internal(LIST_ACCOUNTS_FAILED.to_string())
        })?;

        Ok(accounts.into_iter().map(|a| a.into()).collect())
    }

    /// Delete an account by id; `None` is an id that could not be parsed
    pub async fn delete(&self, id: Option<i32>) -> Result<()> {
        let Some(id) = id else {
            return Err(AppError::NotFound(ACCOUNT_NOT_FOUND.to_string()));
        };

        let deleted = self.repository.delete(id).await.map_err(|e| {
            tracing::error!("Failed to delete account {}: {:?}", id, e);
            AppError::Internal(DELETE_ACCOUNT_FAILED.to_string())
        })?;

        if !deleted {
            return Err(AppError::NotFound(ACCOUNT_NOT_FOUND.to_string()));
        }

        tracing::info!("Account deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{FailingStore, InMemoryAccountRepository};

    fn register_dto(username: &str, password: &str) -> RegisterAccountDto {
        RegisterAccountDto {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            email: None,
            nombre: None,
        }
    }

    fn login_dto(username: &str, password: &str) -> LoginDto {
        LoginDto {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_argon2_login_verifies_hash() {
        let service = AccountService::new(
            Arc::new(InMemoryAccountRepository::default()),
            PasswordStorage::Argon2,
        );

        let account = service.register(register_dto("ana", "clave")).await.unwrap();
        assert!(account.password.starts_with("$argon2id$"));

        assert!(service.login(login_dto("ana", "clave")).await.is_ok());
        assert!(matches!(
            service.login(login_dto("ana", "otra")).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            service.login(login_dto("nadie", "clave")).await,
            Err(AppError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_static_messages() {
        let service = AccountService::new(Arc::new(FailingStore), PasswordStorage::Plaintext);

        let err = service.register(register_dto("ana", "clave")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.message(), REGISTER_FAILED);

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.message(), LIST_ACCOUNTS_FAILED);

        let err = service.delete(Some(1)).await.unwrap_err();
        assert_eq!(err.message(), DELETE_ACCOUNT_FAILED);

        let err = service.login(login_dto("ana", "clave")).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_delete_unparseable_id_is_not_found_without_store_access() {
        let service = AccountService::new(Arc::new(FailingStore), PasswordStorage::Plaintext);
        let err = service.delete(None).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.message(), ACCOUNT_NOT_FOUND);
    }
}
