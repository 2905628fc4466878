//! Domain-level authentication failures.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Discriminant carried by an [`AuthFailure`].
///
/// The seven named variants are the codes the authentication subsystem
/// raises. `Unrecognized` holds any code string that names none of them,
/// e.g. one produced by a newer upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthFailureCode {
    UserNotFound,
    ClientNotFound,
    InvalidInput,
    Forbidden,
    Unauthenticated,
    InvalidData,
    InternalError,
    Unrecognized(String),
}

impl AuthFailureCode {
    /// Canonical wire spelling of the code.
    pub fn as_str(&self) -> &str {
        match self {
            AuthFailureCode::UserNotFound => "USER_NOT_FOUND",
            AuthFailureCode::ClientNotFound => "CLIENT_NOT_FOUND",
            AuthFailureCode::InvalidInput => "INVALID_INPUT",
            AuthFailureCode::Forbidden => "FORBIDDEN_EXCEPTION",
            AuthFailureCode::Unauthenticated => "UNAUTHENTICATED",
            AuthFailureCode::InvalidData => "INVALID_DATA",
            AuthFailureCode::InternalError => "INTERNAL_SERVER_ERROR",
            AuthFailureCode::Unrecognized(raw) => raw,
        }
    }

    /// Parse a code string, keeping unknown spellings as `Unrecognized`.
    ///
    /// Matching ignores case and treats `-` and `_` alike, so
    /// `user-not-found` and `USER_NOT_FOUND` are the same code.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();

        match normalized.as_str() {
            "USER_NOT_FOUND" => AuthFailureCode::UserNotFound,
            "CLIENT_NOT_FOUND" => AuthFailureCode::ClientNotFound,
            "INVALID_INPUT" => AuthFailureCode::InvalidInput,
            "FORBIDDEN" | "FORBIDDEN_EXCEPTION" => AuthFailureCode::Forbidden,
            "UNAUTHENTICATED" => AuthFailureCode::Unauthenticated,
            "INVALID_DATA" => AuthFailureCode::InvalidData,
            "INTERNAL_ERROR" | "INTERNAL_SERVER_ERROR" => AuthFailureCode::InternalError,
            _ => AuthFailureCode::Unrecognized(raw.to_string()),
        }
    }
}

impl fmt::Display for AuthFailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthFailureCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A failed authentication operation.
///
/// Fields are private: a failure is fixed at construction and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthFailure {
    code: AuthFailureCode,
    message: String,
}

impl AuthFailure {
    pub fn new(code: AuthFailureCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> &AuthFailureCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Split the failure into its code and message.
    pub fn into_parts(self) -> (AuthFailureCode, String) {
        (self.code, self.message)
    }

    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(AuthFailureCode::UserNotFound, message)
    }

    pub fn client_not_found(message: impl Into<String>) -> Self {
        Self::new(AuthFailureCode::ClientNotFound, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(AuthFailureCode::InvalidInput, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AuthFailureCode::Forbidden, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(AuthFailureCode::Unauthenticated, message)
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(AuthFailureCode::InvalidData, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AuthFailureCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_spellings() {
        assert_eq!(
            AuthFailureCode::parse("user-not-found"),
            AuthFailureCode::UserNotFound
        );
        assert_eq!(
            AuthFailureCode::parse("CLIENT_NOT_FOUND"),
            AuthFailureCode::ClientNotFound
        );
        assert_eq!(
            AuthFailureCode::parse("forbidden-exception"),
            AuthFailureCode::Forbidden
        );
        assert_eq!(
            AuthFailureCode::parse("internal-error"),
            AuthFailureCode::InternalError
        );
    }

    #[test]
    fn test_parse_keeps_unknown_code_verbatim() {
        let code: AuthFailureCode = "email-not-verified".parse().unwrap();

        assert_eq!(
            code,
            AuthFailureCode::Unrecognized("email-not-verified".to_string())
        );
        assert_eq!(code.as_str(), "email-not-verified");
    }

    #[test]
    fn test_canonical_spelling_parses_back() {
        let codes = [
            AuthFailureCode::UserNotFound,
            AuthFailureCode::ClientNotFound,
            AuthFailureCode::InvalidInput,
            AuthFailureCode::Forbidden,
            AuthFailureCode::Unauthenticated,
            AuthFailureCode::InvalidData,
            AuthFailureCode::InternalError,
        ];

        for code in codes {
            assert_eq!(AuthFailureCode::parse(code.as_str()), code);
        }
    }

    #[test]
    fn test_failure_displays_message_only() {
        let failure = AuthFailure::forbidden("blocked");

        assert_eq!(failure.to_string(), "blocked");
        assert_eq!(failure.code(), &AuthFailureCode::Forbidden);
    }
}
