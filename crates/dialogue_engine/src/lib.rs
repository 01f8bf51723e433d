//! # Dialogue Engine
//!
//! The orchestrator: consumes one inbound message plus user identifier,
//! reads/updates the session, applies the state machine, and produces one
//! outbound text reply. Never returns an error to the caller; remote
//! failures surface as a localized apology.

pub mod engine;

// Re-exports
pub use engine::DialogueEngine;
