use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::driver_verification::application::ports::incoming::use_cases::{
    ReviewVerificationCommand, ReviewVerificationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RejectVerificationRequest {
    #[schema(example = "Licence photo is unreadable")]
    #[serde(default)]
    pub reason: Option<String>,
}

/// Approve a driver
///
/// Moves a pending verification to `verified`.
#[utoipa::path(
    post,
    path = "/api/admin/driver-verifications/{id}/verify",
    tag = "driver-verifications",
    params(("id" = Uuid, Path, description = "Verification id")),
    responses(
        (status = 200, description = "Driver verified"),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Verification not found", body = ErrorResponse),
        (status = 409, description = "Verification already decided", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/driver-verifications/{id}/verify")]
pub async fn verify_driver_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let command = ReviewVerificationCommand::verify(user.user_id, path.into_inner());
    review(&data, command).await
}

/// Reject a driver
///
/// Moves a pending verification to `rejected` with a mandatory reason.
#[utoipa::path(
    post,
    path = "/api/admin/driver-verifications/{id}/reject",
    tag = "driver-verifications",
    params(("id" = Uuid, Path, description = "Verification id")),
    request_body = RejectVerificationRequest,
    responses(
        (status = 200, description = "Driver rejected"),
        (status = 400, description = "Missing rejection reason", body = ErrorResponse,
            example = json!({"success": false, "error": "Please provide a reason for rejection", "code": "REJECTION_REASON_REQUIRED"})),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Verification not found", body = ErrorResponse),
        (status = 409, description = "Verification already decided", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/driver-verifications/{id}/reject")]
pub async fn reject_verification_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<RejectVerificationRequest>,
) -> impl Responder {
    let command = match ReviewVerificationCommand::reject(
        user.user_id,
        path.into_inner(),
        payload.reason.as_deref(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("REJECTION_REASON_REQUIRED", &err.to_string()),
    };

    review(&data, command).await
}

async fn review(data: &web::Data<AppState>, command: ReviewVerificationCommand) -> HttpResponse {
    match data.driver_verification.review.execute(command).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_review_error(err),
    }
}

fn map_review_error(err: ReviewVerificationError) -> HttpResponse {
    match err {
        ReviewVerificationError::AccessDenied => {
            ApiResponse::forbidden("ACCESS_DENIED", "Admin access required")
        }
        ReviewVerificationError::NotFound => {
            ApiResponse::not_found("VERIFICATION_NOT_FOUND", "Verification not found")
        }
        ReviewVerificationError::InvalidStateTransition(msg) => {
            ApiResponse::conflict("INVALID_STATE_TRANSITION", &msg)
        }
        ReviewVerificationError::RepositoryError(msg) => {
            error!("Failed to review driver verification: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
