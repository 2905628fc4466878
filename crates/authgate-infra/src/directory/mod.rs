//! Directory implementations.

mod memory;

pub use memory::{InMemoryClientDirectory, InMemoryUserDirectory};
