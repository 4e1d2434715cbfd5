mod driver_verification_repository;

pub use driver_verification_repository::{
    DriverVerificationRepository, DriverVerificationRepositoryError, NewDriverVerification,
};
