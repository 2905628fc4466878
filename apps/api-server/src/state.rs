//! Application state - shared across all handlers.

use std::sync::Arc;

use authgate_core::AuthFailure;
use authgate_core::ports::{ClientDirectory, PasswordService, TokenService, UserDirectory};
use authgate_core::services::Authenticator;
use authgate_infra::{
    Argon2PasswordService, InMemoryClientDirectory, InMemoryUserDirectory, JwtConfig,
    JwtTokenService,
};

use crate::config::SeedConfig;
use crate::handlers::ADMIN_ROLE;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    /// Wire the authenticator with its infrastructure.
    pub fn new(jwt: JwtConfig) -> Self {
        let users: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::new());
        let clients: Arc<dyn ClientDirectory> = Arc::new(InMemoryClientDirectory::new());
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt));

        tracing::info!("Application state initialized (in-memory directories)");

        Self {
            authenticator: Arc::new(Authenticator::new(users, clients, passwords, tokens)),
        }
    }

    /// Create the bootstrap admin user and API client, if configured.
    pub async fn seed(&self, seed: &SeedConfig) -> Result<(), AuthFailure> {
        if let Some(admin) = &seed.admin {
            let user = self
                .authenticator
                .register_user(&admin.id, &admin.secret, vec![ADMIN_ROLE.to_string()])
                .await?;
            tracing::info!(user_id = %user.id, "Seeded admin user");
        }

        if let Some(client) = &seed.client {
            let client = self
                .authenticator
                .register_client(
                    &client.id,
                    &client.secret,
                    "Seeded client",
                    vec![ADMIN_ROLE.to_string()],
                )
                .await?;
            tracing::info!(client_id = %client.client_id, "Seeded API client");
        }

        Ok(())
    }
}
