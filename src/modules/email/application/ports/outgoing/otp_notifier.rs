#[derive(Debug, Clone, thiserror::Error)]
pub enum OtpNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        valid_for_minutes: i64,
    ) -> Result<(), OtpNotificationError>;
}
