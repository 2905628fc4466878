//! Error responder - renders translated failures as RFC 7807 responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use authgate_core::{ApiFailure, ApiFailureCategory, AuthFailure, translate};
use authgate_shared::ErrorResponse;
use std::fmt;

/// Transport wrapper around [`ApiFailure`].
///
/// Domain failures enter through `From<AuthFailure>`, which runs the gate,
/// so handlers can return `Result<_, AuthFailure>` values with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub ApiFailure);

impl ApiError {
    /// Problem document for this failure, without request context.
    pub fn problem(&self) -> ErrorResponse {
        let category = self.0.category();

        ErrorResponse::new(self.status_code().as_u16(), title(category))
            .with_code(category.code())
            .with_detail(self.0.message())
    }
}

fn title(category: ApiFailureCategory) -> &'static str {
    match category {
        ApiFailureCategory::NotFound => "Not Found",
        ApiFailureCategory::BadUserInput => "Bad Request",
        ApiFailureCategory::Forbidden => "Forbidden",
        ApiFailureCategory::Unauthenticated => "Unauthorized",
        ApiFailureCategory::Internal => "Internal Server Error",
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.category().code(), self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.category() {
            ApiFailureCategory::NotFound => StatusCode::NOT_FOUND,
            ApiFailureCategory::BadUserInput => StatusCode::BAD_REQUEST,
            ApiFailureCategory::Forbidden => StatusCode::FORBIDDEN,
            ApiFailureCategory::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiFailureCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.0.category() {
            ApiFailureCategory::Internal => {
                tracing::error!(detail = %self.0, "Internal error");
            }
            category => {
                tracing::debug!(code = category.code(), detail = %self.0, "Request failed");
            }
        }

        HttpResponse::build(self.status_code()).json(self.problem())
    }
}

impl From<ApiFailure> for ApiError {
    fn from(failure: ApiFailure) -> Self {
        Self(failure)
    }
}

impl From<AuthFailure> for ApiError {
    fn from(failure: AuthFailure) -> Self {
        Self(translate(failure))
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use authgate_core::AuthFailureCode;

    async fn body_of(error: &ApiError) -> ErrorResponse {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_code_matches_category() {
        let cases = [
            (AuthFailure::user_not_found("a"), StatusCode::NOT_FOUND),
            (AuthFailure::client_not_found("b"), StatusCode::NOT_FOUND),
            (AuthFailure::invalid_input("c"), StatusCode::BAD_REQUEST),
            (AuthFailure::forbidden("d"), StatusCode::FORBIDDEN),
            (AuthFailure::unauthenticated("e"), StatusCode::UNAUTHORIZED),
            (
                AuthFailure::invalid_data("f"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AuthFailure::internal("g"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AuthFailure::new(AuthFailureCode::Unrecognized("LATER".into()), "h"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (failure, status) in cases {
            assert_eq!(ApiError::from(failure).status_code(), status);
        }
    }

    #[actix_web::test]
    async fn test_body_carries_category_and_original_message() {
        let error = ApiError::from(AuthFailure::user_not_found("no such user"));

        let body = body_of(&error).await;

        assert_eq!(body.status, 404);
        assert_eq!(body.title, "Not Found");
        assert_eq!(body.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(body.detail.as_deref(), Some("no such user"));
    }

    #[actix_web::test]
    async fn test_body_hides_domain_code() {
        let error = ApiError::from(AuthFailure::invalid_data("bad record"));

        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();

        assert!(text.contains("INTERNAL_SERVER_ERROR"));
        assert!(text.contains("bad record"));
        assert!(!text.contains("INVALID_DATA"));
    }
}
