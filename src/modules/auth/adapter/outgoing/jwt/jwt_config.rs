use std::env;

use crate::shared::config::{non_empty, parse_or, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key =
            non_empty(&lookup, "JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::WeakJwtSecret);
        }

        let access_token_expiry = parse_or(&lookup, "JWT_ACCESS_EXPIRY", 3600i64)?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: non_empty(&lookup, "JWT_ISSUER"),
            audience: non_empty(&lookup, "JWT_AUDIENCE"),
            access_token_expiry,
        })
    }
}
