use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::ride::application::domain::entities::Ride;
use crate::ride::application::ports::incoming::use_cases::{
    CreateRideCommand, CreateRideCommandError, CreateRideError, CreateRideInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRideRequest {
    #[schema(example = "Pune")]
    pub from: Option<String>,
    #[schema(example = "Mumbai")]
    pub to: Option<String>,
    #[schema(example = "2030-01-15")]
    pub date: Option<String>,
    #[schema(example = "09:30")]
    pub time: Option<String>,
    /// Number or numeric string, 1 to 6
    #[schema(value_type = Option<Object>, example = 3)]
    pub seats: Option<Value>,
    /// Number or numeric string, at least 0
    #[schema(value_type = Option<Object>, example = 350)]
    pub price: Option<Value>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,
    pub notes: Option<String>,
    pub no_smoking: Option<bool>,
    pub music_ok: Option<bool>,
    pub ac: Option<bool>,
    pub pets_ok: Option<bool>,
    pub luggage: Option<bool>,
}

impl From<CreateRideRequest> for CreateRideInput {
    fn from(req: CreateRideRequest) -> Self {
        CreateRideInput {
            from: req.from,
            to: req.to,
            date: req.date,
            time: req.time,
            seats: req.seats,
            price: req.price,
            vehicle_make: req.vehicle_make,
            vehicle_model: req.vehicle_model,
            vehicle_number: req.vehicle_number,
            notes: req.notes,
            no_smoking: req.no_smoking,
            music_ok: req.music_ok,
            ac: req.ac,
            pets_ok: req.pets_ok,
            luggage: req.luggage,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRideResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Ride created successfully")]
    pub message: String,
    /// The stored ride row
    #[schema(value_type = Object)]
    pub ride: Ride,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Offer a ride
///
/// Validates the offer and stores it as an active ride driven by the caller.
#[utoipa::path(
    post,
    path = "/api/rides",
    tag = "rides",
    request_body = CreateRideRequest,
    responses(
        (status = 200, description = "Ride created", body = CreateRideResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse,
            example = json!({"success": false, "error": "Seats must be between 1 and 6", "code": "INVALID_SEATS"})),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/rides")]
pub async fn create_ride_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateRideRequest>,
) -> impl Responder {
    let command = match CreateRideCommand::new(user.user_id, payload.into_inner().into(), Utc::now())
    {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.ride.create.execute(command).await {
        Ok(ride) => HttpResponse::Ok().json(CreateRideResponse {
            success: true,
            message: "Ride created successfully".to_string(),
            ride,
        }),
        Err(err) => map_create_ride_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateRideCommandError) -> HttpResponse {
    let code = match err {
        CreateRideCommandError::MissingFields => "MISSING_FIELDS",
        CreateRideCommandError::InvalidSeats => "INVALID_SEATS",
        CreateRideCommandError::InvalidPrice => "INVALID_PRICE",
        CreateRideCommandError::InvalidDeparture => "INVALID_DEPARTURE",
        CreateRideCommandError::PastDeparture => "PAST_DEPARTURE",
    };

    ApiResponse::error(StatusCode::BAD_REQUEST, code, &err.to_string())
}

fn map_create_ride_error(err: CreateRideError) -> HttpResponse {
    match err {
        CreateRideError::RepositoryError(msg) => {
            error!("Failed to create ride: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
