//! Stages and answering modes of a conversation session.

use serde::{Deserialize, Serialize};

/// Position of a session within the conversation flow.
///
/// `GeminiActive` is normally paired with [`Mode::Assisted`]; the engine
/// keeps a defensive branch for the rule-based pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Greet,
    ChooseLanguage,
    AskSymptom,
    Clarify,
    GeminiActive,
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Greet
    }
}

/// Whether the engine answers from local rules or delegates to the
/// remote generative service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    RuleBased,
    Assisted,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::RuleBased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Stage::default(), Stage::Greet);
        assert_eq!(Mode::default(), Mode::RuleBased);
    }

    #[test]
    fn test_snake_case_serialization() {
        assert_eq!(serde_json::to_string(&Stage::ChooseLanguage).unwrap(), "\"choose_language\"");
        assert_eq!(serde_json::to_string(&Stage::GeminiActive).unwrap(), "\"gemini_active\"");
        assert_eq!(serde_json::to_string(&Mode::RuleBased).unwrap(), "\"rule_based\"");
        let mode: Mode = serde_json::from_str("\"assisted\"").unwrap();
        assert_eq!(mode, Mode::Assisted);
    }
}
