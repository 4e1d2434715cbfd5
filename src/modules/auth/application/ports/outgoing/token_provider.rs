use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    InvalidIssuerOrAudience,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::InvalidIssuerOrAudience => write!(f, "Token issuer or audience mismatch"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}
impl Error for TokenError {}

/// Claims carried by access tokens of the auth platform.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, email: Option<&str>)
        -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
