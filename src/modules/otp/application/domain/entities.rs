use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

/// Lifetime of an issued code.
pub const OTP_TTL_MINUTES: i64 = 10;

static OTP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("OTP pattern is a valid regex"));

/// Six ASCII digits, never starting with zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn generate() -> Self {
        let value: u32 = rand::thread_rng().gen_range(100_000..=999_999);
        Self(value.to_string())
    }

    /// Accepts any submitted string of exactly six digits. Anything else can
    /// never match a stored code.
    pub fn parse(raw: &str) -> Option<Self> {
        OTP_PATTERN.is_match(raw).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn expiry_from(now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::minutes(OTP_TTL_MINUTES)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailVerification {
    pub id: Uuid,
    pub email: String,
    pub otp: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl EmailVerification {
    /// A code is dead at the exact instant of expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
