pub mod send_otp;
pub mod verify_otp;

pub use send_otp::{send_otp_handler, SendOtpRequest, SendOtpResponse};
pub use verify_otp::{verify_otp_handler, VerifyOtpRequest, VerifyOtpResponse};
