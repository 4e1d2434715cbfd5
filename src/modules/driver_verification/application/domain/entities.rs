use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// `pending -> verified | rejected`. Both outcomes are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(VerificationStatus::Pending),
            "verified" => Some(VerificationStatus::Verified),
            "rejected" => Some(VerificationStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerificationStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationDomainError {
    #[error("A rejection reason is required")]
    RejectionReasonRequired,

    #[error("Cannot move a {from} verification to {to}")]
    InvalidStateTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Trimmed, non-empty explanation shown to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionReason(String);

impl RejectionReason {
    pub fn new(raw: &str) -> Result<Self, VerificationDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VerificationDomainError::RejectionReasonRequired);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationDecision {
    Verify,
    Reject(RejectionReason),
}

impl VerificationDecision {
    pub fn target_status(&self) -> VerificationStatus {
        match self {
            VerificationDecision::Verify => VerificationStatus::Verified,
            VerificationDecision::Reject(_) => VerificationStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverVerification {
    pub id: Uuid,
    pub user_id: UserId,
    pub license_number: String,
    pub license_image_url: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,
    pub years_experience: Option<i32>,
    pub status: VerificationStatus,
    pub rejection_reason: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl DriverVerification {
    /// Checks that `decision` is a legal move from the current status.
    pub fn check_transition(
        &self,
        decision: &VerificationDecision,
    ) -> Result<(), VerificationDomainError> {
        if self.status.is_terminal() {
            return Err(VerificationDomainError::InvalidStateTransition {
                from: self.status.as_str(),
                to: decision.target_status().as_str(),
            });
        }
        Ok(())
    }

    /// State after `decision` is applied by `admin` at `now`.
    pub fn decide(
        &self,
        decision: &VerificationDecision,
        admin: UserId,
        now: DateTime<Utc>,
    ) -> Result<Self, VerificationDomainError> {
        self.check_transition(decision)?;

        let mut next = self.clone();
        next.status = decision.target_status();
        match decision {
            VerificationDecision::Verify => {
                next.verified_at = Some(now);
                next.verified_by = Some(admin);
            }
            VerificationDecision::Reject(reason) => {
                next.rejection_reason = Some(reason.as_str().to_string());
            }
        }
        Ok(next)
    }
}
