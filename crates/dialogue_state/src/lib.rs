//! dialogue_state - State vocabulary and session state for the conversation flow
//!
//! Replaces the ad-hoc string stages of the original flow with closed
//! enumerations, making illegal stages unrepresentable.

pub mod session;
pub mod stage;

// Re-export commonly used types
pub use session::Session;
pub use stage::{Mode, Stage};
