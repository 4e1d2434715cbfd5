use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::driver_verification::application::domain::entities::{
    DriverVerification, VerificationStatus,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListVerificationsQuery {
    admin: UserId,
    status: Option<VerificationStatus>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ListVerificationsQueryError {
    #[error("Unknown verification status: {0}")]
    InvalidStatus(String),
}

impl ListVerificationsQuery {
    /// `status` of `None`, blank, or `all` lists every record.
    pub fn new(admin: UserId, status: Option<String>) -> Result<Self, ListVerificationsQueryError> {
        let status = match status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(
                VerificationStatus::parse(raw)
                    .ok_or_else(|| ListVerificationsQueryError::InvalidStatus(raw.to_string()))?,
            ),
        };

        Ok(Self { admin, status })
    }

    pub fn admin(&self) -> UserId {
        self.admin
    }

    pub fn status(&self) -> Option<VerificationStatus> {
        self.status
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ListVerificationsError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListVerificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        query: ListVerificationsQuery,
    ) -> Result<Vec<DriverVerification>, ListVerificationsError>;
}
