use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::driver_verification::application::ports::incoming::use_cases::{
    ListVerificationsError, ListVerificationsQuery, ListVerificationsQueryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListVerificationsParams {
    /// `pending`, `verified`, `rejected`, or `all`
    pub status: Option<String>,
}

/// List driver verifications
///
/// Admin dashboard listing, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/driver-verifications",
    tag = "driver-verifications",
    params(ListVerificationsParams),
    responses(
        (status = 200, description = "Verification records"),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/driver-verifications")]
pub async fn list_verifications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    params: web::Query<ListVerificationsParams>,
) -> impl Responder {
    let query = match ListVerificationsQuery::new(user.user_id, params.into_inner().status) {
        Ok(q) => q,
        Err(err @ ListVerificationsQueryError::InvalidStatus(_)) => {
            return ApiResponse::bad_request("INVALID_STATUS", &err.to_string())
        }
    };

    match data.driver_verification.list.execute(query).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListVerificationsError::AccessDenied) => {
            ApiResponse::forbidden("ACCESS_DENIED", "Admin access required")
        }
        Err(ListVerificationsError::RepositoryError(msg)) => {
            error!("Failed to list driver verifications: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::driver_verification::application::domain::entities::{
        DriverVerification, VerificationStatus,
    };
    use crate::driver_verification::application::ports::incoming::use_cases::ListVerificationsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};

    #[derive(Clone)]
    struct MockListUseCase {
        admin: bool,
        seen_status: Arc<Mutex<Option<Option<VerificationStatus>>>>,
    }

    #[async_trait]
    impl ListVerificationsUseCase for MockListUseCase {
        async fn execute(
            &self,
            query: ListVerificationsQuery,
        ) -> Result<Vec<DriverVerification>, ListVerificationsError> {
            if !self.admin {
                return Err(ListVerificationsError::AccessDenied);
            }
            *self.seen_status.lock().unwrap() = Some(query.status());
            Ok(vec![])
        }
    }

    async fn call(uc: MockListUseCase, uri: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_list_driver_verifications(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(list_verifications_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", bearer(Uuid::new_v4())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_admin_lists_with_filter() {
        let uc = MockListUseCase {
            admin: true,
            seen_status: Arc::new(Mutex::new(None)),
        };
        let seen = Arc::clone(&uc.seen_status);

        let (status, body) = call(uc, "/api/admin/driver-verifications?status=rejected").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"].as_array().unwrap().is_empty());
        assert_eq!(*seen.lock().unwrap(), Some(Some(VerificationStatus::Rejected)));
    }

    #[actix_web::test]
    async fn test_non_admin_forbidden_without_data() {
        let uc = MockListUseCase {
            admin: false,
            seen_status: Arc::new(Mutex::new(None)),
        };

        let (status, body) = call(uc, "/api/admin/driver-verifications").await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "ACCESS_DENIED");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_unknown_status_filter() {
        let uc = MockListUseCase {
            admin: true,
            seen_status: Arc::new(Mutex::new(None)),
        };

        let (status, body) = call(uc, "/api/admin/driver-verifications?status=approved").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_STATUS");
    }
}
