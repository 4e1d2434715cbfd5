mod list_verifications;
mod review_verification;
mod submit_verification;

pub use list_verifications::{
    ListVerificationsError, ListVerificationsQuery, ListVerificationsQueryError,
    ListVerificationsUseCase,
};
pub use review_verification::{
    ReviewVerificationCommand, ReviewVerificationCommandError, ReviewVerificationError,
    ReviewVerificationUseCase,
};
pub use submit_verification::{
    SubmitVerificationCommand, SubmitVerificationCommandError, SubmitVerificationError,
    SubmitVerificationInput, SubmitVerificationUseCase,
};
