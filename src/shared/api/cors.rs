// src/shared/api/cors.rs
use actix_web::{http::Method, middleware::DefaultHeaders, HttpRequest, HttpResponse};

use crate::shared::api::ApiResponse;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Headers attached to every response, error responses included.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS))
        .add(("Access-Control-Allow-Methods", ALLOWED_METHODS))
}

/// Default service: browsers preflight any path with OPTIONS.
pub async fn preflight_or_not_found(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }

    ApiResponse::not_found("NOT_FOUND", "Resource not found")
}
