use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;

//
// ──────────────────────────────────────────────────────────
// Issue OTP Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct IssueOtpCommand {
    email: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IssueOtpCommandError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Email address is invalid")]
    InvalidEmail,
}

impl IssueOtpCommand {
    /// Normalizes the address (trimmed, lowercased) before validating it.
    pub fn new(email: Option<String>) -> Result<Self, IssueOtpCommandError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or(IssueOtpCommandError::EmailRequired)?;

        if !EmailAddress::is_valid(&email) {
            return Err(IssueOtpCommandError::InvalidEmail);
        }

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct IssuedOtp {
    pub email: String,
    pub expires_at: DateTime<Utc>,
    /// Present only while development OTP exposure is enabled.
    pub dev_code: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueOtpError {
    #[error("OTP delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait IssueOtpUseCase: Send + Sync {
    async fn execute(&self, command: IssueOtpCommand) -> Result<IssuedOtp, IssueOtpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let cmd = IssueOtpCommand::new(Some("  Rider@Example.COM ".to_string())).unwrap();
        assert_eq!(cmd.email(), "rider@example.com");
    }

    #[test]
    fn missing_or_blank_email_is_required() {
        assert_eq!(
            IssueOtpCommand::new(None).unwrap_err(),
            IssueOtpCommandError::EmailRequired
        );
        assert_eq!(
            IssueOtpCommand::new(Some("   ".to_string())).unwrap_err(),
            IssueOtpCommandError::EmailRequired
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert_eq!(
            IssueOtpCommand::new(Some("not-an-email".to_string())).unwrap_err(),
            IssueOtpCommandError::InvalidEmail
        );
    }
}
