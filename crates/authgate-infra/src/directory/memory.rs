//! In-memory directories - used when no persistent store is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use authgate_core::AuthFailure;
use authgate_core::domain::{ApiClient, User};
use authgate_core::ports::{ClientDirectory, UserDirectory};

/// User directory keyed by id, with lookups by lowercase email.
///
/// Note: Data is lost on process restart.
pub struct InMemoryUserDirectory {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthFailure> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthFailure> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User, AuthFailure> {
        let mut store = self.store.write().await;

        if store
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AuthFailure::invalid_input("Email already registered"));
        }

        tracing::debug!(user_id = %user.id, "User stored");
        store.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Client directory keyed by public client id.
pub struct InMemoryClientDirectory {
    store: RwLock<HashMap<String, ApiClient>>,
}

impl InMemoryClientDirectory {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryClientDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientDirectory for InMemoryClientDirectory {
    async fn find_by_client_id(&self, client_id: &str) -> Result<Option<ApiClient>, AuthFailure> {
        let store = self.store.read().await;
        Ok(store.get(client_id).cloned())
    }

    async fn insert(&self, client: ApiClient) -> Result<ApiClient, AuthFailure> {
        let mut store = self.store.write().await;

        if store.contains_key(&client.client_id) {
            return Err(AuthFailure::invalid_input("Client id already registered"));
        }

        tracing::debug!(client_id = %client.client_id, "API client stored");
        store.insert(client.client_id.clone(), client.clone());
        Ok(client)
    }
}
