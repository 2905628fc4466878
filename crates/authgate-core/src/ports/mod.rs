//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod directory;

pub use auth::{PasswordService, TokenClaims, TokenService};
pub use directory::{ClientDirectory, UserDirectory};
