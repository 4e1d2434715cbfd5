use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::driver_verification::application::domain::entities::{
    DriverVerification, RejectionReason, VerificationDecision, VerificationDomainError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewVerificationCommand {
    admin: UserId,
    verification_id: Uuid,
    decision: VerificationDecision,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReviewVerificationCommandError {
    #[error("Please provide a reason for rejection")]
    RejectionReasonRequired,
}

impl ReviewVerificationCommand {
    pub fn verify(admin: UserId, verification_id: Uuid) -> Self {
        Self {
            admin,
            verification_id,
            decision: VerificationDecision::Verify,
        }
    }

    pub fn reject(
        admin: UserId,
        verification_id: Uuid,
        reason: Option<&str>,
    ) -> Result<Self, ReviewVerificationCommandError> {
        let reason = RejectionReason::new(reason.unwrap_or_default())
            .map_err(|_| ReviewVerificationCommandError::RejectionReasonRequired)?;

        Ok(Self {
            admin,
            verification_id,
            decision: VerificationDecision::Reject(reason),
        })
    }

    pub fn admin(&self) -> UserId {
        self.admin
    }

    pub fn verification_id(&self) -> Uuid {
        self.verification_id
    }

    pub fn decision(&self) -> &VerificationDecision {
        &self.decision
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ReviewVerificationError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Verification not found")]
    NotFound,

    #[error("{0}")]
    InvalidStateTransition(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<VerificationDomainError> for ReviewVerificationError {
    fn from(e: VerificationDomainError) -> Self {
        ReviewVerificationError::InvalidStateTransition(e.to_string())
    }
}

#[async_trait]
pub trait ReviewVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReviewVerificationCommand,
    ) -> Result<DriverVerification, ReviewVerificationError>;
}
