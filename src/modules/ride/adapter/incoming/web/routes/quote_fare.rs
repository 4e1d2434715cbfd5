use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::ride::application::domain::fare::FareBreakdown;
use crate::ride::application::ports::incoming::use_cases::{QuoteFareCommand, QuoteFareError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct QuoteFareRequest {
    #[schema(example = 2)]
    pub seats: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FareQuoteResponse {
    pub ride_id: Uuid,
    #[schema(example = 350.0)]
    pub price_per_seat: f64,
    #[schema(example = 2)]
    pub seats: i32,
    #[schema(example = 700.0)]
    pub fare: f64,
    #[schema(example = 20.0)]
    pub platform_fee: f64,
    #[schema(example = 130.0)]
    pub tax: f64,
    #[schema(example = 850.0)]
    pub total: f64,
}

impl FareQuoteResponse {
    fn new(ride_id: Uuid, quote: FareBreakdown) -> Self {
        Self {
            ride_id,
            price_per_seat: quote.price_per_seat,
            seats: quote.seats,
            fare: quote.fare,
            platform_fee: quote.platform_fee,
            tax: quote.tax,
            total: quote.total,
        }
    }
}

/// Quote a booking
///
/// Prices `seats` on the ride: seat fare, platform fee, and tax.
#[utoipa::path(
    post,
    path = "/api/rides/{ride_id}/quote",
    tag = "rides",
    params(("ride_id" = Uuid, Path, description = "Ride to price")),
    request_body = QuoteFareRequest,
    responses(
        (status = 200, description = "Fare breakdown", body = FareQuoteResponse),
        (status = 400, description = "Invalid seat count", body = ErrorResponse),
        (status = 404, description = "Ride not found", body = ErrorResponse),
        (status = 409, description = "Ride no longer bookable", body = ErrorResponse),
    )
)]
#[post("/api/rides/{ride_id}/quote")]
pub async fn quote_fare_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<QuoteFareRequest>,
) -> impl Responder {
    let ride_id = path.into_inner();
    let command = QuoteFareCommand::new(ride_id, payload.seats);

    match data.ride.quote.execute(command).await {
        Ok(quote) => ApiResponse::success(FareQuoteResponse::new(ride_id, quote)),
        Err(err) => map_quote_error(err),
    }
}

fn map_quote_error(err: QuoteFareError) -> HttpResponse {
    match err {
        QuoteFareError::RideNotFound => ApiResponse::not_found("RIDE_NOT_FOUND", "Ride not found"),
        QuoteFareError::RideNotBookable => ApiResponse::conflict(
            "RIDE_NOT_BOOKABLE",
            "Ride is no longer open for booking",
        ),
        QuoteFareError::InvalidSeats => {
            ApiResponse::bad_request("INVALID_SEATS", "At least one seat must be booked")
        }
        e @ QuoteFareError::SeatsUnavailable { .. } => {
            ApiResponse::bad_request("SEATS_UNAVAILABLE", &e.to_string())
        }
        QuoteFareError::InvalidPrice => {
            error!("Stored ride has an invalid price");
            ApiResponse::internal_error()
        }
        QuoteFareError::QueryError(msg) => {
            error!("Failed to quote fare: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
