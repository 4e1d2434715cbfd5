use async_trait::async_trait;

use crate::auth::application::helpers::{AdminAccessError, AdminGuard};
use crate::driver_verification::application::domain::entities::DriverVerification;
use crate::driver_verification::application::ports::incoming::use_cases::{
    ListVerificationsError, ListVerificationsQuery, ListVerificationsUseCase,
};
use crate::driver_verification::application::ports::outgoing::DriverVerificationRepository;

pub struct ListVerificationsService<R>
where
    R: DriverVerificationRepository,
{
    repository: R,
    guard: AdminGuard,
}

impl<R> ListVerificationsService<R>
where
    R: DriverVerificationRepository,
{
    pub fn new(repository: R, guard: AdminGuard) -> Self {
        Self { repository, guard }
    }
}

#[async_trait]
impl<R> ListVerificationsUseCase for ListVerificationsService<R>
where
    R: DriverVerificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        query: ListVerificationsQuery,
    ) -> Result<Vec<DriverVerification>, ListVerificationsError> {
        self.guard
            .ensure_admin(query.admin())
            .await
            .map_err(|e| match e {
                AdminAccessError::Denied => ListVerificationsError::AccessDenied,
                AdminAccessError::RoleLookupFailed(msg) => {
                    ListVerificationsError::RepositoryError(msg)
                }
            })?;

        self.repository
            .list(query.status())
            .await
            .map_err(|e| ListVerificationsError::RepositoryError(e.to_string()))
    }
}
