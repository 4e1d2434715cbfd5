use std::sync::Arc;

use crate::otp::application::ports::incoming::use_cases::{IssueOtpUseCase, VerifyOtpUseCase};

#[derive(Clone)]
pub struct OtpUseCases {
    pub issue: Arc<dyn IssueOtpUseCase + Send + Sync>,
    pub verify: Arc<dyn VerifyOtpUseCase + Send + Sync>,
}
