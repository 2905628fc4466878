//! Authentication handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use authgate_core::services::IssuedToken;
use authgate_shared::dto::{
    AuthResponse, ClientTokenRequest, LoginRequest, RegisterUserRequest, UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::ApiResult;
use crate::state::AppState;

/// Role granted to self-registered users.
const DEFAULT_ROLE: &str = "user";

/// Role required by the admin endpoint.
pub const ADMIN_ROLE: &str = "admin";

fn auth_response(token: IssuedToken) -> AuthResponse {
    AuthResponse {
        access_token: token.access_token,
        token_type: token.token_type,
        expires_in: token.expires_in,
    }
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .authenticator
        .register_user(&req.email, &req.password, vec![DEFAULT_ROLE.to_string()])
        .await?;
    let token = state.authenticator.issue_for_user(&user)?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(HttpResponse::Created().json(auth_response(token)))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();

    let token = state.authenticator.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(auth_response(token)))
}

/// POST /api/auth/token - client-credentials exchange
pub async fn client_token(
    state: web::Data<AppState>,
    body: web::Json<ClientTokenRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();

    let token = state
        .authenticator
        .exchange_client_credentials(&req.client_id, &req.client_secret)
        .await?;

    Ok(HttpResponse::Ok().json(auth_response(token)))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> ApiResult<HttpResponse> {
    let user = state.authenticator.current_user(&identity.claims).await?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id.to_string(),
        email: user.email,
        roles: user.roles,
        created_at: user.created_at.to_rfc3339(),
    }))
}

#[derive(Serialize)]
struct AdminResponse {
    subject: String,
    roles: Vec<String>,
}

/// GET /api/auth/admin - requires the admin role
pub async fn admin(state: web::Data<AppState>, identity: Identity) -> ApiResult<HttpResponse> {
    state
        .authenticator
        .require_role(&identity.claims, ADMIN_ROLE)?;

    Ok(HttpResponse::Ok().json(AdminResponse {
        subject: identity.claims.subject,
        roles: identity.claims.roles,
    }))
}
