use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::rating::application::ports::incoming::use_cases::{
    CreateRatingCommand, CreateRatingCommandError, CreateRatingError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRatingRequest {
    pub ride_id: Option<Uuid>,
    pub to_user_id: Option<Uuid>,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: Option<i32>,
    #[schema(example = "Punctual and friendly")]
    pub review: Option<String>,
}

/// Rate a ride partner
///
/// Records one rating per ride and rated user for the caller.
#[utoipa::path(
    post,
    path = "/api/ratings",
    tag = "ratings",
    request_body = CreateRatingRequest,
    responses(
        (status = 201, description = "Rating recorded"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Ride not found", body = ErrorResponse),
        (status = 409, description = "Already rated", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/ratings")]
pub async fn create_rating_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateRatingRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match CreateRatingCommand::new(
        user.user_id,
        req.ride_id,
        req.to_user_id,
        req.rating,
        req.review,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_rating_use_case.execute(command).await {
        Ok(rating) => ApiResponse::created(rating),
        Err(err) => map_create_rating_error(err),
    }
}

fn map_command_error(err: CreateRatingCommandError) -> HttpResponse {
    let code = match err {
        CreateRatingCommandError::MissingFields => "MISSING_FIELDS",
        CreateRatingCommandError::InvalidRating => "INVALID_RATING",
        CreateRatingCommandError::SelfRating => "SELF_RATING",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_create_rating_error(err: CreateRatingError) -> HttpResponse {
    match err {
        CreateRatingError::RideNotFound => ApiResponse::not_found("RIDE_NOT_FOUND", "Ride not found"),
        CreateRatingError::AlreadyRated => ApiResponse::conflict(
            "ALREADY_RATED",
            "You have already rated this user for this ride",
        ),
        CreateRatingError::RepositoryError(msg) => {
            error!("Failed to create rating: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};

    use crate::rating::application::domain::entities::Rating;
    use crate::rating::application::ports::incoming::use_cases::CreateRatingUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};

    struct MockCreateRatingUseCase {
        error: Option<CreateRatingError>,
    }

    #[async_trait]
    impl CreateRatingUseCase for MockCreateRatingUseCase {
        async fn execute(&self, command: CreateRatingCommand) -> Result<Rating, CreateRatingError> {
            if let Some(err) = &self.error {
                return Err(err.clone());
            }
            let data = command.into_data();
            Ok(Rating {
                id: Uuid::new_v4(),
                ride_id: data.ride_id,
                from_user_id: data.from_user_id,
                to_user_id: data.to_user_id,
                rating: data.rating,
                review: data.review,
                created_at: Utc::now(),
            })
        }
    }

    async fn call(
        error: Option<CreateRatingError>,
        caller: Uuid,
        body: Value,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_rating(MockCreateRatingUseCase { error })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_rating_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/ratings")
            .insert_header(("Authorization", bearer(caller)))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_rating_created() {
        let caller = Uuid::new_v4();
        let driver = Uuid::new_v4();

        let (status, body) = call(
            None,
            caller,
            json!({
                "rideId": Uuid::new_v4(),
                "toUserId": driver,
                "rating": 5,
                "review": "  Great ride "
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["from_user_id"], caller.to_string());
        assert_eq!(body["data"]["to_user_id"], driver.to_string());
        assert_eq!(body["data"]["rating"], 5);
        assert_eq!(body["data"]["review"], "Great ride");
    }

    #[actix_web::test]
    async fn test_rating_out_of_range() {
        let (status, body) = call(
            None,
            Uuid::new_v4(),
            json!({ "rideId": Uuid::new_v4(), "toUserId": Uuid::new_v4(), "rating": 0 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_RATING");
    }

    #[actix_web::test]
    async fn test_self_rating() {
        let me = Uuid::new_v4();

        let (status, body) = call(
            None,
            me,
            json!({ "rideId": Uuid::new_v4(), "toUserId": me, "rating": 4 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "SELF_RATING");
    }

    #[actix_web::test]
    async fn test_already_rated() {
        let (status, body) = call(
            Some(CreateRatingError::AlreadyRated),
            Uuid::new_v4(),
            json!({ "rideId": Uuid::new_v4(), "toUserId": Uuid::new_v4(), "rating": 3 }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "ALREADY_RATED");
    }

    #[actix_web::test]
    async fn test_unknown_ride() {
        let (status, body) = call(
            Some(CreateRatingError::RideNotFound),
            Uuid::new_v4(),
            json!({ "rideId": Uuid::new_v4(), "toUserId": Uuid::new_v4(), "rating": 3 }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "RIDE_NOT_FOUND");
    }
}
