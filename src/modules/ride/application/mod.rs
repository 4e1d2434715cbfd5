pub mod domain;
pub mod ports;
pub mod ride_use_cases;
pub mod services;
