pub mod domain;
pub mod otp_use_cases;
pub mod ports;
pub mod services;
