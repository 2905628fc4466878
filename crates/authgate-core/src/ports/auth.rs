//! Credential and token ports.

use uuid::Uuid;

use crate::error::AuthFailure;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Id of the user or API client the token was issued to.
    pub subject_id: Uuid,
    /// Email for users, public client id for API clients.
    pub subject: String,
    pub roles: Vec<String>,
    pub exp: i64,
}

impl TokenClaims {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Token service trait for access-token operations.
pub trait TokenService: Send + Sync {
    /// Issue an access token for a subject.
    fn generate_token(
        &self,
        subject_id: Uuid,
        subject: &str,
        roles: Vec<String>,
    ) -> Result<String, AuthFailure>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthFailure>;

    /// Lifetime of issued tokens.
    fn expiration_seconds(&self) -> i64;
}

/// Password and secret hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text secret.
    fn hash(&self, password: &str) -> Result<String, AuthFailure>;

    /// Verify a secret against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; an unreadable hash is an error.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthFailure>;
}
