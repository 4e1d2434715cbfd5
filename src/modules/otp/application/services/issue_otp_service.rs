use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::email::application::ports::outgoing::OtpNotifier;
use crate::otp::application::domain::entities::{OtpCode, OTP_TTL_MINUTES};
use crate::otp::application::ports::incoming::use_cases::{
    IssueOtpCommand, IssueOtpError, IssueOtpUseCase, IssuedOtp,
};
use crate::otp::application::ports::outgoing::{
    EmailVerificationRepository, NewEmailVerification,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct IssueOtpService<R>
where
    R: EmailVerificationRepository,
{
    repository: R,
    notifier: Arc<dyn OtpNotifier + Send + Sync>,
    expose_code: bool,
}

impl<R> IssueOtpService<R>
where
    R: EmailVerificationRepository,
{
    pub fn new(
        repository: R,
        notifier: Arc<dyn OtpNotifier + Send + Sync>,
        expose_code: bool,
    ) -> Self {
        Self {
            repository,
            notifier,
            expose_code,
        }
    }
}

#[async_trait]
impl<R> IssueOtpUseCase for IssueOtpService<R>
where
    R: EmailVerificationRepository + Send + Sync,
{
    async fn execute(&self, command: IssueOtpCommand) -> Result<IssuedOtp, IssueOtpError> {
        let email = command.email().to_string();
        let now = Utc::now();

        // Housekeeping only; a failure here must not block issuing a code.
        match self.repository.prune_stale(&email, now).await {
            Ok(removed) if removed > 0 => {
                tracing::debug!(email = %email, removed, "Pruned stale verification rows");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "Failed to prune stale verification rows");
            }
        }

        let code = OtpCode::generate();
        let expires_at = OtpCode::expiry_from(now);

        self.repository
            .insert(NewEmailVerification {
                email: email.clone(),
                otp: code.as_str().to_string(),
                expires_at,
                created_at: now,
            })
            .await
            .map_err(|e| IssueOtpError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_otp(&email, code.as_str(), OTP_TTL_MINUTES)
            .await
            .map_err(|e| IssueOtpError::DeliveryFailed(e.to_string()))?;

        let dev_code = if self.expose_code {
            tracing::info!(email = %email, otp = %code.as_str(), "Development OTP issued");
            Some(code.as_str().to_string())
        } else {
            tracing::info!(email = %email, "OTP issued");
            None
        };

        Ok(IssuedOtp {
            email,
            expires_at,
            dev_code,
        })
    }
}
