use async_trait::async_trait;

use crate::driver_verification::application::domain::entities::DriverVerification;
use crate::driver_verification::application::ports::incoming::use_cases::{
    SubmitVerificationCommand, SubmitVerificationError, SubmitVerificationUseCase,
};
use crate::driver_verification::application::ports::outgoing::{
    DriverVerificationRepository, DriverVerificationRepositoryError,
};

pub struct SubmitVerificationService<R>
where
    R: DriverVerificationRepository,
{
    repository: R,
}

impl<R> SubmitVerificationService<R>
where
    R: DriverVerificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_err(e: DriverVerificationRepositoryError) -> SubmitVerificationError {
    match e {
        DriverVerificationRepositoryError::AlreadyExists => SubmitVerificationError::AlreadyExists,
        DriverVerificationRepositoryError::DatabaseError(msg) => {
            SubmitVerificationError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl<R> SubmitVerificationUseCase for SubmitVerificationService<R>
where
    R: DriverVerificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitVerificationCommand,
    ) -> Result<DriverVerification, SubmitVerificationError> {
        let user_id = command.user_id();

        if let Some(existing) = self
            .repository
            .find_open_for_user(user_id)
            .await
            .map_err(map_repo_err)?
        {
            tracing::debug!(
                user_id = %user_id,
                verification_id = %existing.id,
                status = existing.status.as_str(),
                "Driver already has an open verification"
            );
            return Err(SubmitVerificationError::AlreadyExists);
        }

        // The partial unique index still catches a concurrent duplicate.
        let created = self
            .repository
            .insert(command.into_data())
            .await
            .map_err(map_repo_err)?;

        tracing::info!(user_id = %user_id, verification_id = %created.id, "Driver verification submitted");

        Ok(created)
    }
}
