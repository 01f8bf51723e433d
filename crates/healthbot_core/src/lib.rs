//! # Healthbot Core
//!
//! Leaf building blocks shared by every other crate: the supported-language
//! set, automatic language detection, the static condition guide with its
//! symptom matcher, the localized message catalog, and env configuration.

pub mod config;
pub mod detect;
pub mod knowledge;
pub mod language;
pub mod messages;

// Re-exports
pub use config::Config;
pub use knowledge::{match_condition, Condition, Localized};
pub use language::Language;
