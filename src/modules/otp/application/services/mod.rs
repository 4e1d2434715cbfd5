mod issue_otp_service;
mod verify_otp_service;

pub use issue_otp_service::IssueOtpService;
pub use verify_otp_service::VerifyOtpService;
