pub mod domain;
pub mod driver_verification_use_cases;
pub mod ports;
pub mod services;
