// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Human readable message
    #[schema(example = "Missing required fields")]
    pub error: String,
    /// Error code for programmatic handling
    #[schema(example = "MISSING_FIELDS")]
    pub code: String,
}
