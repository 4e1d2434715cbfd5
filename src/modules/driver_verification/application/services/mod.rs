mod list_verifications_service;
mod review_verification_service;
mod submit_verification_service;

pub use list_verifications_service::ListVerificationsService;
pub use review_verification_service::ReviewVerificationService;
pub use submit_verification_service::SubmitVerificationService;
