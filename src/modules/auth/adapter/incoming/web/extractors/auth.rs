use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Caller identity taken from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: Option<String>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("Token provider is not registered in app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
                email: claims.email,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}
