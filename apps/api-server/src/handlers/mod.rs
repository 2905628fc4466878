//! HTTP handlers and route configuration.

mod auth;
mod health;

pub use auth::ADMIN_ROLE;

use actix_web::web;
use authgate_core::ApiFailure;

use crate::middleware::error::ApiError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/token", web::post().to(auth::client_token))
                    .route("/me", web::get().to(auth::me))
                    .route("/admin", web::get().to(auth::admin)),
            ),
    );
}

/// Malformed JSON bodies become `BAD_USER_INPUT` problems like any other input error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError(ApiFailure::BadUserInput(err.to_string())).into()
    })
}
