use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::driver_verification::application::domain::entities::DriverVerification;
use crate::driver_verification::application::ports::outgoing::NewDriverVerification;

#[derive(Debug, Clone, Default)]
pub struct SubmitVerificationInput {
    pub license_number: Option<String>,
    pub license_image_url: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,
    pub years_experience: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct SubmitVerificationCommand {
    data: NewDriverVerification,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitVerificationCommandError {
    #[error("License number is required")]
    LicenseNumberRequired,

    #[error("Years of experience cannot be negative")]
    InvalidExperience,
}

impl SubmitVerificationCommand {
    pub fn new(
        user_id: UserId,
        input: SubmitVerificationInput,
    ) -> Result<Self, SubmitVerificationCommandError> {
        let license_number = clean(input.license_number)
            .ok_or(SubmitVerificationCommandError::LicenseNumberRequired)?;

        if input.years_experience.is_some_and(|y| y < 0) {
            return Err(SubmitVerificationCommandError::InvalidExperience);
        }

        Ok(Self {
            data: NewDriverVerification {
                user_id,
                license_number,
                license_image_url: clean(input.license_image_url),
                vehicle_make: clean(input.vehicle_make),
                vehicle_model: clean(input.vehicle_model),
                vehicle_number: clean(input.vehicle_number),
                years_experience: input.years_experience,
            },
        })
    }

    pub fn user_id(&self) -> UserId {
        self.data.user_id
    }

    pub fn data(&self) -> &NewDriverVerification {
        &self.data
    }

    pub fn into_data(self) -> NewDriverVerification {
        self.data
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SubmitVerificationError {
    #[error("A verification request is already pending or approved")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitVerificationCommand,
    ) -> Result<DriverVerification, SubmitVerificationError>;
}
