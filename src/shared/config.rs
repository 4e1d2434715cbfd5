// src/shared/config.rs
use std::env;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    WeakJwtSecret,

    #[error("EXPOSE_DEV_OTP cannot be enabled when RUST_ENV=production")]
    DevOtpInProduction,
}

/// Outgoing mail transport selected from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailTransport {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    Local {
        host: String,
        port: u16,
    },
    LogOnly,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub environment: String,
    pub run_migrations: bool,
    pub expose_dev_otp: bool,
    pub email_from: String,
    pub mail_transport: MailTransport,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let is_production = environment == "production";

        let database_url =
            non_empty(&lookup, "DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = non_empty(&lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let run_migrations = parse_bool(&lookup, "RUN_MIGRATIONS", false)?;
        let expose_dev_otp = parse_bool(&lookup, "EXPOSE_DEV_OTP", !is_production)?;

        if expose_dev_otp && is_production {
            return Err(ConfigError::DevOtpInProduction);
        }

        let email_from = non_empty(&lookup, "EMAIL_FROM")
            .unwrap_or_else(|| "no-reply@rideshare.local".to_string());

        let mail_transport = if environment == "test" {
            match non_empty(&lookup, "SMTP_HOST") {
                Some(host) => MailTransport::Local {
                    host,
                    port: parse_or(&lookup, "SMTP_PORT", 1025u16)?,
                },
                None => MailTransport::LogOnly,
            }
        } else {
            match non_empty(&lookup, "SMTP_SERVER") {
                Some(server) => MailTransport::Relay {
                    server,
                    username: non_empty(&lookup, "SMTP_USERNAME")
                        .ok_or(ConfigError::Missing("SMTP_USERNAME"))?,
                    password: non_empty(&lookup, "SMTP_PASSWORD")
                        .ok_or(ConfigError::Missing("SMTP_PASSWORD"))?,
                },
                None => MailTransport::LogOnly,
            }
        };

        Ok(Self {
            host,
            port,
            database_url,
            environment,
            run_migrations,
            expose_dev_otp,
            email_from,
            mail_transport,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Loads `.env.{RUST_ENV}` first and falls back to `.env`.
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

pub(crate) fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
        None => Ok(default),
    }
}
