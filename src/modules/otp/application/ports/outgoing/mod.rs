mod email_verification_repository;

pub use email_verification_repository::{
    EmailVerificationRepository, EmailVerificationRepositoryError, NewEmailVerification,
};
