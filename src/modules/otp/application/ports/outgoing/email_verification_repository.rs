use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::otp::application::domain::entities::EmailVerification;

#[derive(Debug, Clone)]
pub struct NewEmailVerification {
    pub email: String,
    pub otp: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailVerificationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EmailVerificationRepository: Send + Sync {
    /// Deletes rows for `email` that are expired at `now` or already consumed.
    async fn prune_stale(
        &self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, EmailVerificationRepositoryError>;

    async fn insert(
        &self,
        data: NewEmailVerification,
    ) -> Result<EmailVerification, EmailVerificationRepositoryError>;

    /// Most recently created unconsumed row matching the pair.
    async fn find_latest_unverified(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<Option<EmailVerification>, EmailVerificationRepositoryError>;

    /// Flips `verified` only if it is still false. Returns whether this call won.
    async fn mark_verified(&self, id: Uuid) -> Result<bool, EmailVerificationRepositoryError>;
}
