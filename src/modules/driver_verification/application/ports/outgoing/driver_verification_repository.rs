use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::driver_verification::application::domain::entities::{
    DriverVerification, VerificationDecision, VerificationStatus,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriverVerification {
    pub user_id: UserId,
    pub license_number: String,
    pub license_image_url: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,
    pub years_experience: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DriverVerificationRepositoryError {
    #[error("Driver already has an open verification")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DriverVerificationRepository: Send + Sync {
    async fn insert(
        &self,
        data: NewDriverVerification,
    ) -> Result<DriverVerification, DriverVerificationRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<DriverVerification>, DriverVerificationRepositoryError>;

    /// Pending or verified record for the driver, if any.
    async fn find_open_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<DriverVerification>, DriverVerificationRepositoryError>;

    /// Newest first, optionally narrowed to one status.
    async fn list(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<DriverVerification>, DriverVerificationRepositoryError>;

    /// Writes `decision` only while the row is still pending.
    /// `None` means the row was no longer pending.
    async fn apply_decision(
        &self,
        id: Uuid,
        decision: &VerificationDecision,
        admin: UserId,
        decided_at: DateTime<Utc>,
    ) -> Result<Option<DriverVerification>, DriverVerificationRepositoryError>;
}
