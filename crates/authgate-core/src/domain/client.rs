use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API client entity - a machine caller using the client-credentials flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiClient {
    pub id: Uuid,
    /// Public identifier presented by the caller.
    pub client_id: String,
    pub secret_hash: String,
    pub name: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApiClient {
    pub fn new(client_id: String, secret_hash: String, name: String, roles: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_id,
            secret_hash,
            name,
            roles,
            created_at: now,
            updated_at: now,
        }
    }
}
