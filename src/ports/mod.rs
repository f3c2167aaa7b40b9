//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `VisitorSessionStore` - Per-visitor answer and notice storage

mod visitor_session_store;

pub use visitor_session_store::{SessionStoreError, VisitorSessionStore};
