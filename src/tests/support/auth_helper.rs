use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

const TEST_SECRET: &str = "test-secret-key-for-rideshare-tests-only";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: None,
        audience: None,
        access_token_expiry: 3600,
    }
}

/// Token provider registered in app data by route tests.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header value for `user_id`, signed with the test secret.
pub fn bearer(user_id: Uuid) -> String {
    let token = JwtTokenService::new(test_jwt_config())
        .generate_access_token(user_id, None)
        .expect("test token should sign");
    format!("Bearer {}", token)
}
