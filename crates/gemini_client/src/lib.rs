//! # Gemini Client
//!
//! Remote answer client: builds a constrained prompt, calls the Gemini
//! `generateContent` endpoint with bounded retry/backoff, and normalizes
//! the known response shapes into plain text.

pub mod client;
pub mod error;
pub mod prompt;
pub mod response;

// Re-exports
pub use client::{GeminiAsk, GeminiClient};
pub use error::{GeminiError, Result};
pub use prompt::build_prompt;
pub use response::GenerateReply;
