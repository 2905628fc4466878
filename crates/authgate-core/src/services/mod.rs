//! Application services built on the ports.

mod authenticator;

pub use authenticator::{Authenticator, IssuedToken, MIN_SECRET_LEN};
