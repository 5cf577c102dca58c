use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::core::config::PasswordStorage;

/// Turns submitted passwords into the stored form and checks them back.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    storage: PasswordStorage,
}

impl PasswordService {
    pub fn new(storage: PasswordStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> PasswordStorage {
        self.storage
    }

    /// Value to persist for a newly registered password.
    pub fn prepare(&self, raw: &str) -> Result<String, argon2::password_hash::Error> {
        match self.storage {
            PasswordStorage::Plaintext => Ok(raw.to_string()),
            PasswordStorage::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Ok(Argon2::default()
                    .hash_password(raw.as_bytes(), &salt)?
                    .to_string())
            }
        }
    }

    /// Whether `raw` matches the stored credential. Unparseable hashes never match.
    pub fn verify(&self, raw: &str, stored: &str) -> bool {
        match self.storage {
            PasswordStorage::Plaintext => raw == stored,
            PasswordStorage::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(raw.as_bytes(), &parsed)
                    .is_ok(),
                Err(e) => {
                    tracing::warn!("Stored password is not a valid PHC string: {}", e);
                    false
                }
            },
        }
    }
}
