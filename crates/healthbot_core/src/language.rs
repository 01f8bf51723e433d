//! Supported languages and explicit language-choice keywords.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four languages the assistant can reply in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Mr,
    Bn,
}

/// Language-name keywords a user may type during language selection.
/// Checked before falling back to automatic detection.
const CHOICE_KEYWORDS: [(&str, Language); 5] = [
    ("हिंदी", Language::Hi),
    ("english", Language::En),
    ("मराठी", Language::Mr),
    ("বাংলা", Language::Bn),
    ("bengali", Language::Bn),
];

impl Language {
    /// ISO-style 2-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Bn => "bn",
        }
    }

    /// Parse a 2-letter code, `None` for anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "mr" => Some(Language::Mr),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }

    /// Extract an explicit language choice from free text, if present.
    pub fn from_choice(text: &str) -> Option<Language> {
        let normalized = text.to_lowercase();
        CHOICE_KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|(_, lang)| *lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_code() {
        assert_eq!(Language::Hi.to_string(), "hi");
        assert_eq!(format!("{}", Language::En), "en");
    }

    #[test]
    fn test_code_round_trip() {
        for lang in [Language::En, Language::Hi, Language::Mr, Language::Bn] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Bn).unwrap(), "\"bn\"");
        let lang: Language = serde_json::from_str("\"mr\"").unwrap();
        assert_eq!(lang, Language::Mr);
    }

    #[test]
    fn test_explicit_choice_keywords() {
        assert_eq!(Language::from_choice("English please"), Some(Language::En));
        assert_eq!(Language::from_choice("हिंदी"), Some(Language::Hi));
        assert_eq!(Language::from_choice("I prefer Bengali"), Some(Language::Bn));
        assert_eq!(Language::from_choice("বাংলা"), Some(Language::Bn));
        assert_eq!(Language::from_choice("मराठी"), Some(Language::Mr));
        assert_eq!(Language::from_choice("something else"), None);
    }
}
