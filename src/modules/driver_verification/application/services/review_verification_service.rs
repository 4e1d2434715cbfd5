use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::helpers::{AdminAccessError, AdminGuard};
use crate::driver_verification::application::domain::entities::{
    DriverVerification, VerificationDomainError, VerificationStatus,
};
use crate::driver_verification::application::ports::incoming::use_cases::{
    ReviewVerificationCommand, ReviewVerificationError, ReviewVerificationUseCase,
};
use crate::driver_verification::application::ports::outgoing::DriverVerificationRepository;

pub struct ReviewVerificationService<R>
where
    R: DriverVerificationRepository,
{
    repository: R,
    guard: AdminGuard,
}

impl<R> ReviewVerificationService<R>
where
    R: DriverVerificationRepository,
{
    pub fn new(repository: R, guard: AdminGuard) -> Self {
        Self { repository, guard }
    }
}

#[async_trait]
impl<R> ReviewVerificationUseCase for ReviewVerificationService<R>
where
    R: DriverVerificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ReviewVerificationCommand,
    ) -> Result<DriverVerification, ReviewVerificationError> {
        let admin = command.admin();
        let id = command.verification_id();
        let decision = command.decision();

        // Role check comes before the record is read.
        self.guard.ensure_admin(admin).await.map_err(|e| match e {
            AdminAccessError::Denied => ReviewVerificationError::AccessDenied,
            AdminAccessError::RoleLookupFailed(msg) => ReviewVerificationError::RepositoryError(msg),
        })?;

        let current = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| ReviewVerificationError::RepositoryError(e.to_string()))?
            .ok_or(ReviewVerificationError::NotFound)?;

        let decided_at = Utc::now();
        let expected = current.decide(decision, admin, decided_at)?;

        let updated = self
            .repository
            .apply_decision(id, decision, admin, decided_at)
            .await
            .map_err(|e| ReviewVerificationError::RepositoryError(e.to_string()))?;

        match updated {
            Some(record) if record.status != expected.status => {
                tracing::error!(
                    verification_id = %id,
                    expected = expected.status.as_str(),
                    stored = record.status.as_str(),
                    "Store applied a different decision"
                );
                Err(ReviewVerificationError::RepositoryError(format!(
                    "expected status {}, store returned {}",
                    expected.status.as_str(),
                    record.status.as_str()
                )))
            }
            Some(record) => {
                tracing::info!(
                    verification_id = %id,
                    admin_id = %admin,
                    status = record.status.as_str(),
                    "Driver verification reviewed"
                );
                Ok(record)
            }
            // Another admin decided between the read and the write.
            None => Err(VerificationDomainError::InvalidStateTransition {
                from: VerificationStatus::Pending.as_str(),
                to: decision.target_status().as_str(),
            }
            .into()),
        }
    }
}
