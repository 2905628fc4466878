//! # AuthGate Core
//!
//! The domain layer of AuthGate.
//! This crate holds the authentication failure types, the gate that
//! translates them into API failures, and the authenticator service. It has
//! zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod gate;
pub mod ports;
pub mod services;

pub use error::{AuthFailure, AuthFailureCode};
pub use gate::{ApiFailure, ApiFailureCategory, translate};
