use crate::api::schemas::{ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::driver_verification::adapter::incoming::web::routes::{
    RejectVerificationRequest, SubmitVerificationRequest,
};
use crate::otp::adapter::incoming::web::routes::{
    SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse,
};
use crate::rating::adapter::incoming::web::routes::CreateRatingRequest;
use crate::ride::adapter::incoming::web::routes::{
    CreateRideRequest, CreateRideResponse, FareQuoteResponse, QuoteFareRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rideshare API",
        version = "1.0.0",
        description = "Email OTP, ride offers, fare quotes, driver verification and ratings",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // OTP endpoints
        crate::otp::adapter::incoming::web::routes::send_otp::send_otp_handler,
        crate::otp::adapter::incoming::web::routes::verify_otp::verify_otp_handler,

        // Ride endpoints
        crate::ride::adapter::incoming::web::routes::create_ride::create_ride_handler,
        crate::ride::adapter::incoming::web::routes::search_rides::search_rides_handler,
        crate::ride::adapter::incoming::web::routes::quote_fare::quote_fare_handler,

        // Driver verification endpoints
        crate::driver_verification::adapter::incoming::web::routes::submit_verification::submit_verification_handler,
        crate::driver_verification::adapter::incoming::web::routes::list_verifications::list_verifications_handler,
        crate::driver_verification::adapter::incoming::web::routes::review_verification::verify_driver_handler,
        crate::driver_verification::adapter::incoming::web::routes::review_verification::reject_verification_handler,

        // Rating endpoints
        crate::rating::adapter::incoming::web::routes::create_rating::create_rating_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<FareQuoteResponse>,
            ErrorResponse,

            // OTP DTOs
            SendOtpRequest,
            SendOtpResponse,
            VerifyOtpRequest,
            VerifyOtpResponse,

            // Ride DTOs
            CreateRideRequest,
            CreateRideResponse,
            QuoteFareRequest,
            FareQuoteResponse,

            // Driver verification DTOs
            SubmitVerificationRequest,
            RejectVerificationRequest,

            // Rating DTOs
            CreateRatingRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "otp", description = "Email one-time code endpoints"),
        (name = "rides", description = "Ride offers, search and fare quotes"),
        (name = "driver-verifications", description = "Driver verification requests and admin review"),
        (name = "ratings", description = "Post-ride ratings"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the auth platform"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_core_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/otp/send",
            "/api/otp/verify",
            "/api/rides",
            "/api/rides/{ride_id}/quote",
            "/api/driver-verifications",
            "/api/admin/driver-verifications",
            "/api/admin/driver-verifications/{id}/verify",
            "/api/admin/driver-verifications/{id}/reject",
            "/api/ratings",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
