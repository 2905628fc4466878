//! Bearer-token identity extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use authgate_core::AuthFailure;
use authgate_core::ports::TokenClaims;

use crate::middleware::error::ApiError;
use crate::state::AppState;

/// Authenticated caller identity.
///
/// Use this in handlers to require a valid access token:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.claims.subject)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub claims: TokenClaims,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self { claims }
    }
}

impl FromRequest for Identity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(ApiError::from))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AuthFailure> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return Err(AuthFailure::internal("Server configuration error"));
    };

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AuthFailure::unauthenticated("Missing authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthFailure::invalid_input("Invalid authorization header"))?;

    // Parse "Bearer <token>"
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthFailure::unauthenticated("Expected Bearer token"))?;

    state.authenticator.authenticate(token).map(Identity::from)
}
