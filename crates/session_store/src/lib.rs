//! # Session Store
//!
//! In-memory mapping from user identifier to session state. Access for a
//! single user is serialized through a per-user gate; expiry is checked
//! lazily on access.

pub mod store;

// Re-exports
pub use store::SessionStore;
