mod cors;
mod json_config;
mod response;

pub use cors::{cors_headers, preflight_or_not_found};
pub use json_config::custom_json_config;
pub use response::{ApiErrorBody, ApiResponse};
