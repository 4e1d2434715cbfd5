use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::driver_verification::application::ports::incoming::use_cases::{
    SubmitVerificationCommand, SubmitVerificationCommandError, SubmitVerificationError,
    SubmitVerificationInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitVerificationRequest {
    #[schema(example = "DL-0420110149646")]
    pub license_number: Option<String>,
    pub license_image_url: Option<String>,
    #[schema(example = "Hyundai")]
    pub vehicle_make: Option<String>,
    #[schema(example = "i20")]
    pub vehicle_model: Option<String>,
    #[schema(example = "MH12AB1234")]
    pub vehicle_number: Option<String>,
    #[schema(example = 5)]
    pub years_experience: Option<i32>,
}

/// Request driver verification
///
/// Files a pending verification for the caller. Only one pending or approved
/// request may exist per driver.
#[utoipa::path(
    post,
    path = "/api/driver-verifications",
    tag = "driver-verifications",
    request_body = SubmitVerificationRequest,
    responses(
        (status = 201, description = "Verification request filed"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 409, description = "An open request already exists", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/driver-verifications")]
pub async fn submit_verification_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<SubmitVerificationRequest>,
) -> impl Responder {
    let req = payload.into_inner();
    let input = SubmitVerificationInput {
        license_number: req.license_number,
        license_image_url: req.license_image_url,
        vehicle_make: req.vehicle_make,
        vehicle_model: req.vehicle_model,
        vehicle_number: req.vehicle_number,
        years_experience: req.years_experience,
    };

    let command = match SubmitVerificationCommand::new(user.user_id, input) {
        Ok(cmd) => cmd,
        Err(SubmitVerificationCommandError::LicenseNumberRequired) => {
            return ApiResponse::bad_request(
                "LICENSE_NUMBER_REQUIRED",
                "License number is required",
            )
        }
        Err(SubmitVerificationCommandError::InvalidExperience) => {
            return ApiResponse::bad_request(
                "INVALID_EXPERIENCE",
                "Years of experience cannot be negative",
            )
        }
    };

    match data.driver_verification.submit.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_submit_error(err),
    }
}

fn map_submit_error(err: SubmitVerificationError) -> HttpResponse {
    match err {
        SubmitVerificationError::AlreadyExists => ApiResponse::conflict(
            "VERIFICATION_ALREADY_EXISTS",
            "A verification request is already pending or approved",
        ),
        SubmitVerificationError::RepositoryError(msg) => {
            error!("Failed to submit driver verification: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
