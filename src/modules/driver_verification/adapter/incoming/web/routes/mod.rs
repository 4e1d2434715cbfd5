pub mod list_verifications;
pub mod review_verification;
pub mod submit_verification;

pub use list_verifications::{list_verifications_handler, ListVerificationsParams};
pub use review_verification::{
    reject_verification_handler, verify_driver_handler, RejectVerificationRequest,
};
pub use submit_verification::{submit_verification_handler, SubmitVerificationRequest};
