//! # AuthGate Infrastructure
//!
//! Concrete implementations of the ports defined in `authgate-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `auth` - JWT + Argon2 authentication

pub mod directory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use directory::{InMemoryClientDirectory, InMemoryUserDirectory};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService, MAX_EXPIRATION_HOURS};
