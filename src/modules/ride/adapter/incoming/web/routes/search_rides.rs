use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::ride::application::ports::incoming::use_cases::{
    SearchRidesError, SearchRidesQuery, SearchRidesQueryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchRidesParams {
    /// Origin contains this text (case-insensitive)
    pub from: Option<String>,
    /// Destination contains this text (case-insensitive)
    pub to: Option<String>,
    /// Exact departure date, YYYY-MM-DD
    pub date: Option<String>,
}

/// Search active rides
///
/// Lists active rides matching the filters, earliest departure first.
#[utoipa::path(
    get,
    path = "/api/rides",
    tag = "rides",
    params(SearchRidesParams),
    responses(
        (status = 200, description = "Matching rides"),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/rides")]
pub async fn search_rides_handler(
    data: web::Data<AppState>,
    params: web::Query<SearchRidesParams>,
) -> impl Responder {
    let params = params.into_inner();

    let query = match SearchRidesQuery::new(params.from, params.to, params.date) {
        Ok(q) => q,
        Err(SearchRidesQueryError::InvalidDate) => {
            return ApiResponse::bad_request("INVALID_DATE", "Date must use the YYYY-MM-DD format")
        }
    };

    match data.ride.search.execute(query).await {
        Ok(rides) => ApiResponse::success(rides),
        Err(SearchRidesError::QueryError(msg)) => {
            error!("Failed to search rides: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
