//! Domain entities - the principals the authentication subsystem knows about.

mod client;
mod user;

pub use client::ApiClient;
pub use user::User;
