//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use authgate_core::AuthFailure;
use authgate_core::ports::{TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// Longest accepted token lifetime (one year).
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: 24,
            issuer: "authgate".to_string(),
        }
    }
}

impl JwtConfig {
    /// Whether the placeholder secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // subject id
    name: String,
    roles: Vec<String>,
    exp: i64,    // expiration timestamp
    iat: i64,    // issued at
    iss: String, // issuer
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(
        &self,
        subject_id: Uuid,
        subject: &str,
        roles: Vec<String>,
    ) -> Result<String, AuthFailure> {
        let now = Utc::now();
        let exp = TimeDelta::try_hours(self.config.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AuthFailure::internal(format!(
                    "Token lifetime of {} hours is out of range",
                    self.config.expiration_hours
                ))
            })?;

        let claims = Claims {
            sub: subject_id.to_string(),
            name: subject.to_string(),
            roles,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthFailure::internal(format!("Failed to sign token: {e}")))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthFailure> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthFailure::unauthenticated("Token expired"),
                ErrorKind::InvalidIssuer => {
                    AuthFailure::unauthenticated("Token was issued by an untrusted issuer")
                }
                _ => AuthFailure::unauthenticated(format!("Invalid token: {e}")),
            })?;

        let subject_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| AuthFailure::invalid_data(format!("Token subject is not a UUID: {e}")))?;

        Ok(TokenClaims {
            subject_id,
            subject: token_data.claims.name,
            roles: token_data.claims.roles,
            exp: token_data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours.saturating_mul(3600)
    }
}
