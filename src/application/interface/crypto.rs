use crate::application::app_error::AppResult;
use async_trait::async_trait;

/// One-way password hashing for stored credentials.
#[async_trait]
pub trait CredentialsHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> AppResult<String>;
    /// `Ok(false)` for a wrong password; errors only on an unreadable hash.
    async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool>;
}
