use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        if let Some(issuer) = &self.config.issuer {
            validation.set_issuer(&[issuer]);
        }

        match &self.config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        validation
    }
}

impl TokenProvider for JwtTokenService {
    /// Issues a token shaped like the ones the auth platform hands out.
    fn generate_access_token(
        &self,
        user_id: Uuid,
        email: Option<&str>,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: Some(now.timestamp()),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            email: email.map(str::to_string),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                        tracing::warn!("Token verification failed: issuer or audience mismatch");
                        TokenError::InvalidIssuerOrAudience
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}
