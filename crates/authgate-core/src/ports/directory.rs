//! Lookup ports for the principals that can authenticate.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ApiClient, User};
use crate::error::AuthFailure;

/// Storage of user accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthFailure>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthFailure>;

    /// Store a new user. Fails with `InvalidInput` if the email is taken.
    async fn insert(&self, user: User) -> Result<User, AuthFailure>;
}

/// Storage of API clients.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    async fn find_by_client_id(&self, client_id: &str) -> Result<Option<ApiClient>, AuthFailure>;

    /// Store a new client. Fails with `InvalidInput` if the client id is taken.
    async fn insert(&self, client: ApiClient) -> Result<ApiClient, AuthFailure>;
}
