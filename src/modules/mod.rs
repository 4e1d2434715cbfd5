pub mod auth;
pub mod driver_verification;
pub mod email;
pub mod otp;
pub mod rating;
pub mod ride;
