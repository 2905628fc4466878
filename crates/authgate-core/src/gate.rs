//! Translation of authentication failures into API-facing failures.
//!
//! The gate is a pure function: it reads the failure code, picks one
//! [`ApiFailureCategory`], and carries the message across unchanged. The
//! fine-grained [`AuthFailureCode`] does not survive past this point.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::error::{AuthFailure, AuthFailureCode};

/// Coarse error categories exposed to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFailureCategory {
    NotFound,
    BadUserInput,
    Forbidden,
    Unauthenticated,
    Internal,
}

impl ApiFailureCategory {
    /// Machine-readable code serialized to clients.
    pub fn code(self) -> &'static str {
        match self {
            ApiFailureCategory::NotFound => "NOT_FOUND",
            ApiFailureCategory::BadUserInput => "BAD_USER_INPUT",
            ApiFailureCategory::Forbidden => "FORBIDDEN",
            ApiFailureCategory::Unauthenticated => "UNAUTHENTICATED",
            ApiFailureCategory::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl Serialize for ApiFailureCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Failure raised to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadUserInput(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiFailure {
    pub fn category(&self) -> ApiFailureCategory {
        match self {
            ApiFailure::NotFound(_) => ApiFailureCategory::NotFound,
            ApiFailure::BadUserInput(_) => ApiFailureCategory::BadUserInput,
            ApiFailure::Forbidden(_) => ApiFailureCategory::Forbidden,
            ApiFailure::Unauthenticated(_) => ApiFailureCategory::Unauthenticated,
            ApiFailure::Internal(_) => ApiFailureCategory::Internal,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiFailure::NotFound(msg)
            | ApiFailure::BadUserInput(msg)
            | ApiFailure::Forbidden(msg)
            | ApiFailure::Unauthenticated(msg)
            | ApiFailure::Internal(msg) => msg,
        }
    }
}

/// Translate a domain failure into its API category.
///
/// Total over every code, including unrecognized ones, which fall back to
/// [`ApiFailure::Internal`].
pub fn translate(failure: AuthFailure) -> ApiFailure {
    let (code, message) = failure.into_parts();

    match code {
        AuthFailureCode::UserNotFound | AuthFailureCode::ClientNotFound => {
            ApiFailure::NotFound(message)
        }
        AuthFailureCode::InvalidInput => ApiFailure::BadUserInput(message),
        AuthFailureCode::Forbidden => ApiFailure::Forbidden(message),
        AuthFailureCode::Unauthenticated => ApiFailure::Unauthenticated(message),
        AuthFailureCode::InvalidData | AuthFailureCode::InternalError => {
            ApiFailure::Internal(message)
        }
        AuthFailureCode::Unrecognized(_) => ApiFailure::Internal(message),
    }
}

impl From<AuthFailure> for ApiFailure {
    fn from(failure: AuthFailure) -> Self {
        translate(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_maps_to_its_category() {
        let cases = [
            (AuthFailureCode::UserNotFound, ApiFailureCategory::NotFound),
            (AuthFailureCode::ClientNotFound, ApiFailureCategory::NotFound),
            (AuthFailureCode::InvalidInput, ApiFailureCategory::BadUserInput),
            (AuthFailureCode::Forbidden, ApiFailureCategory::Forbidden),
            (
                AuthFailureCode::Unauthenticated,
                ApiFailureCategory::Unauthenticated,
            ),
            (AuthFailureCode::InvalidData, ApiFailureCategory::Internal),
            (AuthFailureCode::InternalError, ApiFailureCategory::Internal),
        ];

        for (code, expected) in cases {
            let label = code.to_string();
            let translated = translate(AuthFailure::new(code, "msg"));
            assert_eq!(translated.category(), expected, "code {label}");
            assert_eq!(translated.message(), "msg");
        }
    }

    #[test]
    fn test_unrecognized_code_falls_back_to_internal() {
        for raw in ["SESSION_REVOKED", "", "not-a-code", "user_not_foundx"] {
            let failure = AuthFailure::new(AuthFailureCode::parse(raw), "x");
            assert_eq!(translate(failure), ApiFailure::Internal("x".to_string()));
        }
    }

    #[test]
    fn test_message_passes_through_byte_for_byte() {
        let message = "  Ünïcode\tmessage with \"quotes\" and trailing space ";
        let failure = AuthFailure::invalid_input(message);

        assert_eq!(translate(failure).message(), message);
    }

    #[test]
    fn test_translation_is_idempotent() {
        let failure = AuthFailure::unauthenticated("token expired");

        let first = translate(failure.clone());
        let second = translate(failure);

        assert_eq!(first, second);
    }

    #[test]
    fn test_question_mark_always_raises_translated_error() {
        fn handler() -> Result<(), ApiFailure> {
            let outcome: Result<(), AuthFailure> = Err(AuthFailure::client_not_found("gone"));
            outcome?;
            Ok(())
        }

        assert_eq!(handler(), Err(ApiFailure::NotFound("gone".to_string())));
    }

    #[test]
    fn test_documented_scenarios() {
        let user = AuthFailure::new(AuthFailureCode::parse("user-not-found"), "no such user");
        assert_eq!(
            translate(user),
            ApiFailure::NotFound("no such user".to_string())
        );

        let blocked = AuthFailure::new(AuthFailureCode::parse("forbidden-exception"), "blocked");
        assert_eq!(
            translate(blocked),
            ApiFailure::Forbidden("blocked".to_string())
        );

        let bad = AuthFailure::new(AuthFailureCode::parse("invalid-data"), "bad record");
        assert_eq!(
            translate(bad),
            ApiFailure::Internal("bad record".to_string())
        );

        let future = AuthFailure::new(AuthFailureCode::parse("quota-exceeded"), "x");
        assert_eq!(translate(future), ApiFailure::Internal("x".to_string()));
    }

    #[test]
    fn test_concurrent_translations_are_independent() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    translate(AuthFailure::forbidden(format!("caller {i}")))
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let translated = handle.join().unwrap();
            assert_eq!(translated, ApiFailure::Forbidden(format!("caller {i}")));
        }
    }

    #[test]
    fn test_category_serializes_as_code() {
        for category in [
            ApiFailureCategory::NotFound,
            ApiFailureCategory::BadUserInput,
            ApiFailureCategory::Forbidden,
            ApiFailureCategory::Unauthenticated,
            ApiFailureCategory::Internal,
        ] {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.code().to_string()));
        }
    }
}
