//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes, pages, and visitor-cookie middleware
//! - `session_store` - Visitor session storage implementations

pub mod http;
pub mod session_store;

pub use session_store::InMemorySessionStore;
