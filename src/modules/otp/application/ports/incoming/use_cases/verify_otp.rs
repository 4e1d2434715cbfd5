use async_trait::async_trait;
use serde::Serialize;

//
// ──────────────────────────────────────────────────────────
// Verify OTP Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct VerifyOtpCommand {
    email: String,
    otp: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerifyOtpCommandError {
    #[error("Email and OTP are required")]
    MissingFields,
}

impl VerifyOtpCommand {
    /// The email is normalized the same way it was when the code was issued.
    /// The submitted code is kept verbatim.
    pub fn new(email: Option<String>, otp: Option<String>) -> Result<Self, VerifyOtpCommandError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());
        let otp = otp.filter(|o| !o.is_empty());

        match (email, otp) {
            (Some(email), Some(otp)) => Ok(Self { email, otp }),
            _ => Err(VerifyOtpCommandError::MissingFields),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedEmail {
    pub email: String,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("Invalid or expired OTP")]
    InvalidOtp,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait VerifyOtpUseCase: Send + Sync {
    async fn execute(&self, command: VerifyOtpCommand) -> Result<VerifiedEmail, VerifyOtpError>;
}
