use async_trait::async_trait;
use chrono::Utc;

use crate::otp::application::domain::entities::OtpCode;
use crate::otp::application::ports::incoming::use_cases::{
    VerifiedEmail, VerifyOtpCommand, VerifyOtpError, VerifyOtpUseCase,
};
use crate::otp::application::ports::outgoing::EmailVerificationRepository;

pub struct VerifyOtpService<R>
where
    R: EmailVerificationRepository,
{
    repository: R,
}

impl<R> VerifyOtpService<R>
where
    R: EmailVerificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> VerifyOtpUseCase for VerifyOtpService<R>
where
    R: EmailVerificationRepository + Send + Sync,
{
    async fn execute(&self, command: VerifyOtpCommand) -> Result<VerifiedEmail, VerifyOtpError> {
        let email = command.email();

        let code = OtpCode::parse(command.otp()).ok_or(VerifyOtpError::InvalidOtp)?;

        let record = self
            .repository
            .find_latest_unverified(email, code.as_str())
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::InvalidOtp)?;

        if record.is_expired_at(Utc::now()) {
            tracing::debug!(email = %email, "Rejected expired OTP");
            return Err(VerifyOtpError::OtpExpired);
        }

        let consumed = self
            .repository
            .mark_verified(record.id)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?;

        // Another request consumed the same row first.
        if !consumed {
            return Err(VerifyOtpError::InvalidOtp);
        }

        tracing::info!(email = %email, "Email verified");

        Ok(VerifiedEmail {
            email: record.email,
        })
    }
}
