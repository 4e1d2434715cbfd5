use std::sync::Arc;

use crate::driver_verification::application::ports::incoming::use_cases::{
    ListVerificationsUseCase, ReviewVerificationUseCase, SubmitVerificationUseCase,
};

#[derive(Clone)]
pub struct DriverVerificationUseCases {
    pub submit: Arc<dyn SubmitVerificationUseCase + Send + Sync>,
    pub list: Arc<dyn ListVerificationsUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewVerificationUseCase + Send + Sync>,
}
