//! Application configuration loaded from environment variables.

use std::env;

use authgate_infra::{JwtConfig, MAX_EXPIRATION_HOURS};
use thiserror::Error;

/// Configuration errors detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("{present} is set but {missing} is not")]
    IncompletePair {
        present: &'static str,
        missing: &'static str,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub seed: SeedConfig,
}

/// A principal identifier and its secret.
#[derive(Debug, Clone)]
pub struct SeedCredentials {
    pub id: String,
    pub secret: String,
}

/// Principals created at startup.
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    /// From `SEED_ADMIN_EMAIL` / `SEED_ADMIN_PASSWORD`.
    pub admin: Option<SeedCredentials>,
    /// From `SEED_CLIENT_ID` / `SEED_CLIENT_SECRET`.
    pub client: Option<SeedCredentials>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port: u16 = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            Err(_) => 8080,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            jwt: jwt_from_env()?,
            seed: SeedConfig {
                admin: credentials_pair("SEED_ADMIN_EMAIL", "SEED_ADMIN_PASSWORD")?,
                client: credentials_pair("SEED_CLIENT_ID", "SEED_CLIENT_SECRET")?,
            },
        })
    }
}

/// Load from `JWT_SECRET`, `JWT_EXPIRATION_HOURS` and `JWT_ISSUER`.
fn jwt_from_env() -> Result<JwtConfig, ConfigError> {
    let defaults = JwtConfig::default();

    let config = JwtConfig {
        secret: env::var("JWT_SECRET").unwrap_or(defaults.secret),
        expiration_hours: match env::var("JWT_EXPIRATION_HOURS") {
            Ok(value) => parse_expiration_hours(value)?,
            Err(_) => defaults.expiration_hours,
        },
        issuer: env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
    };

    // Warn if using default secret in production
    if config.uses_default_secret() {
        let is_production = env::var("RUST_ENV")
            .map(|v| v == "production" || v == "prod")
            .unwrap_or(false);

        if is_production {
            tracing::error!(
                "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
            );
        } else {
            tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
        }
    }

    Ok(config)
}

/// Token lifetime must be a whole number of hours in `1..=MAX_EXPIRATION_HOURS`.
fn parse_expiration_hours(value: String) -> Result<i64, ConfigError> {
    let parsed = value.trim().parse::<i64>();
    match parsed {
        Ok(hours) if (1..=MAX_EXPIRATION_HOURS).contains(&hours) => Ok(hours),
        _ => Err(ConfigError::InvalidValue {
            name: "JWT_EXPIRATION_HOURS",
            value,
        }),
    }
}

fn credentials_pair(
    id_var: &'static str,
    secret_var: &'static str,
) -> Result<Option<SeedCredentials>, ConfigError> {
    pair(env::var(id_var).ok(), env::var(secret_var).ok(), id_var, secret_var)
}

fn pair(
    id: Option<String>,
    secret: Option<String>,
    id_var: &'static str,
    secret_var: &'static str,
) -> Result<Option<SeedCredentials>, ConfigError> {
    match (id, secret) {
        (Some(id), Some(secret)) => Ok(Some(SeedCredentials { id, secret })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::IncompletePair {
            present: id_var,
            missing: secret_var,
        }),
        (None, Some(_)) => Err(ConfigError::IncompletePair {
            present: secret_var,
            missing: id_var,
        }),
    }
}
