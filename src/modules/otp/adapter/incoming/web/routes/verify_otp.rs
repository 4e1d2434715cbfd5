use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::otp::application::ports::incoming::use_cases::{
    VerifyOtpCommand, VerifyOtpCommandError, VerifyOtpError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct VerifyOtpRequest {
    #[schema(example = "rider@example.com")]
    #[serde(default)]
    pub email: Option<String>,

    #[schema(example = "482913")]
    #[serde(default)]
    pub otp: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyOtpResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "OTP verified successfully")]
    pub message: String,
    #[schema(example = "rider@example.com")]
    pub email: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Consume a one-time code
///
/// A code can be consumed once. Expired codes are rejected with `OTP_EXPIRED`.
#[utoipa::path(
    post,
    path = "/api/otp/verify",
    tag = "otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Email verified", body = VerifyOtpResponse),
        (status = 400, description = "Missing fields, unknown, consumed or expired code", body = ErrorResponse,
            example = json!({"success": false, "error": "Invalid or expired OTP", "code": "INVALID_OTP"})),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[post("/api/otp/verify")]
pub async fn verify_otp_handler(
    data: web::Data<AppState>,
    payload: web::Json<VerifyOtpRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match VerifyOtpCommand::new(payload.email, payload.otp) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.otp.verify.execute(command).await {
        Ok(verified) => HttpResponse::Ok().json(VerifyOtpResponse {
            success: true,
            message: "OTP verified successfully".to_string(),
            email: verified.email,
        }),
        Err(err) => map_verify_otp_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: VerifyOtpCommandError) -> HttpResponse {
    match err {
        VerifyOtpCommandError::MissingFields => {
            ApiResponse::bad_request("MISSING_FIELDS", "Email and OTP are required")
        }
    }
}

fn map_verify_otp_error(err: VerifyOtpError) -> HttpResponse {
    match err {
        VerifyOtpError::InvalidOtp => {
            ApiResponse::bad_request("INVALID_OTP", "Invalid or expired OTP")
        }
        VerifyOtpError::OtpExpired => ApiResponse::bad_request("OTP_EXPIRED", "OTP has expired"),
        VerifyOtpError::RepositoryError(msg) => {
            error!("Repository error verifying OTP: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::otp::application::ports::incoming::use_cases::{VerifiedEmail, VerifyOtpUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockVerifyOtpUseCase {
        result: Result<(), VerifyOtpError>,
    }

    #[async_trait]
    impl VerifyOtpUseCase for MockVerifyOtpUseCase {
        async fn execute(
            &self,
            command: VerifyOtpCommand,
        ) -> Result<VerifiedEmail, VerifyOtpError> {
            self.result.clone().map(|_| VerifiedEmail {
                email: command.email().to_string(),
            })
        }
    }

    async fn call(result: Result<(), VerifyOtpError>, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_verify_otp(MockVerifyOtpUseCase { result })
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(verify_otp_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/otp/verify")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_verify_otp_success() {
        let (status, body) = call(
            Ok(()),
            json!({ "email": "Rider@Example.com", "otp": "482913" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "OTP verified successfully");
        assert_eq!(body["email"], "rider@example.com");
    }

    #[actix_web::test]
    async fn test_verify_otp_missing_fields() {
        let (status, body) = call(Ok(()), json!({ "email": "rider@example.com" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_FIELDS");
    }

    #[actix_web::test]
    async fn test_verify_otp_invalid() {
        let (status, body) = call(
            Err(VerifyOtpError::InvalidOtp),
            json!({ "email": "rider@example.com", "otp": "000000" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_OTP");
        assert_eq!(body["error"], "Invalid or expired OTP");
    }

    #[actix_web::test]
    async fn test_verify_otp_expired() {
        let (status, body) = call(
            Err(VerifyOtpError::OtpExpired),
            json!({ "email": "rider@example.com", "otp": "482913" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "OTP_EXPIRED");
    }

    #[actix_web::test]
    async fn test_verify_otp_repository_error() {
        let (status, body) = call(
            Err(VerifyOtpError::RepositoryError("db".to_string())),
            json!({ "email": "rider@example.com", "otp": "482913" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
    }
}
