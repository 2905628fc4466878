//! # AuthGate API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    tracing::info!(
        "Starting AuthGate API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.jwt.clone());
    state.seed(&config.seed).await.map_err(|e| {
        tracing::error!(code = %e.code(), error = %e, "Failed to seed principals");
        std::io::Error::other(e)
    })?;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
