mod issue_otp;
mod verify_otp;

pub use issue_otp::{
    IssueOtpCommand, IssueOtpCommandError, IssueOtpError, IssueOtpUseCase, IssuedOtp,
};
pub use verify_otp::{
    VerifiedEmail, VerifyOtpCommand, VerifyOtpCommandError, VerifyOtpError, VerifyOtpUseCase,
};
