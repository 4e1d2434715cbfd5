use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::otp::application::ports::incoming::use_cases::{
    IssueOtpCommand, IssueOtpCommandError, IssueOtpError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SendOtpRequest {
    /// Address that will receive the code
    #[schema(example = "rider@example.com")]
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "OTP sent successfully")]
    pub message: String,
    /// Only returned while development OTP exposure is enabled
    #[schema(example = "482913")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_otp: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Issue a one-time code
///
/// Generates a 6-digit code valid for 10 minutes and emails it to the address.
#[utoipa::path(
    post,
    path = "/api/otp/send",
    tag = "otp",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "Code issued", body = SendOtpResponse),
        (status = 400, description = "Missing or invalid email", body = ErrorResponse,
            example = json!({"success": false, "error": "Email is required", "code": "EMAIL_REQUIRED"})),
        (status = 500, description = "Store or delivery failure", body = ErrorResponse),
    )
)]
#[post("/api/otp/send")]
pub async fn send_otp_handler(
    data: web::Data<AppState>,
    payload: web::Json<SendOtpRequest>,
) -> impl Responder {
    // 1️⃣ Build command (validation happens here)
    let command = match IssueOtpCommand::new(payload.into_inner().email) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.otp.issue.execute(command).await {
        Ok(issued) => HttpResponse::Ok().json(SendOtpResponse {
            success: true,
            message: "OTP sent successfully".to_string(),
            dev_otp: issued.dev_code,
        }),
        Err(err) => map_issue_otp_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: IssueOtpCommandError) -> HttpResponse {
    match err {
        IssueOtpCommandError::EmailRequired => {
            ApiResponse::bad_request("EMAIL_REQUIRED", "Email is required")
        }
        IssueOtpCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email address is invalid")
        }
    }
}

fn map_issue_otp_error(err: IssueOtpError) -> HttpResponse {
    match err {
        IssueOtpError::DeliveryFailed(msg) => {
            error!("Failed to deliver OTP: {}", msg);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "OTP_DELIVERY_FAILED",
                "Failed to send OTP",
            )
        }
        IssueOtpError::RepositoryError(msg) => {
            error!("Repository error issuing OTP: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::otp::application::ports::incoming::use_cases::{IssueOtpUseCase, IssuedOtp};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock Issue OTP Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockIssueOtpUseCase {
        result: Result<Option<String>, IssueOtpError>,
        seen_email: Arc<Mutex<Option<String>>>,
    }

    impl MockIssueOtpUseCase {
        fn success(dev_code: Option<&str>) -> Self {
            Self {
                result: Ok(dev_code.map(str::to_string)),
                seen_email: Arc::new(Mutex::new(None)),
            }
        }

        fn error(err: IssueOtpError) -> Self {
            Self {
                result: Err(err),
                seen_email: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl IssueOtpUseCase for MockIssueOtpUseCase {
        async fn execute(&self, command: IssueOtpCommand) -> Result<IssuedOtp, IssueOtpError> {
            *self.seen_email.lock().unwrap() = Some(command.email().to_string());
            self.result.clone().map(|dev_code| IssuedOtp {
                email: command.email().to_string(),
                expires_at: Utc::now(),
                dev_code,
            })
        }
    }

    async fn call(uc: MockIssueOtpUseCase, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_issue_otp(uc).build();
        let app = test::init_service(App::new().app_data(app_state).service(send_otp_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/otp/send")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    /* --------------------------------------------------
     * Success Cases
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_send_otp_success_with_dev_otp() {
        let uc = MockIssueOtpUseCase::success(Some("482913"));
        let seen = Arc::clone(&uc.seen_email);

        let (status, body) = call(uc, json!({ "email": "  Rider@Example.com " })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "OTP sent successfully");
        assert_eq!(body["devOtp"], "482913");
        assert_eq!(seen.lock().unwrap().as_deref(), Some("rider@example.com"));
    }

    #[actix_web::test]
    async fn test_send_otp_success_hides_dev_otp() {
        let (status, body) = call(
            MockIssueOtpUseCase::success(None),
            json!({ "email": "rider@example.com" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("devOtp").is_none());
    }

    /* --------------------------------------------------
     * Validation Errors
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_send_otp_missing_email() {
        let (status, body) = call(MockIssueOtpUseCase::success(None), json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "EMAIL_REQUIRED");
        assert_eq!(body["error"], "Email is required");
    }

    #[actix_web::test]
    async fn test_send_otp_invalid_email() {
        let (status, body) = call(
            MockIssueOtpUseCase::success(None),
            json!({ "email": "nope" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_EMAIL");
    }

    /* --------------------------------------------------
     * Use Case Errors
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_send_otp_delivery_failure() {
        let (status, body) = call(
            MockIssueOtpUseCase::error(IssueOtpError::DeliveryFailed("smtp".to_string())),
            json!({ "email": "rider@example.com" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "OTP_DELIVERY_FAILED");
    }

    #[actix_web::test]
    async fn test_send_otp_repository_error() {
        let (status, body) = call(
            MockIssueOtpUseCase::error(IssueOtpError::RepositoryError("db".to_string())),
            json!({ "email": "rider@example.com" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An unexpected error occurred");
    }
}
