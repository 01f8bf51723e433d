//! Environment configuration, read once at startup.

use std::time::Duration;

/// Sessions idle longer than this are treated as nonexistent.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(300);

/// Safer default for free-tier API keys.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_PORT: u16 = 5000;

/// Process configuration.
///
/// A missing API key must not crash anything; it only degrades remote
/// calls to the immediate localized fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub model: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `GEMINI_API_KEY`: remote service credential (optional)
    /// - `GEN_MODEL`: model name (default: `gemini-1.5-flash`)
    /// - `PORT`: listening port (default: 5000)
    /// - `APP_DEBUG`: debug flag (default: off)
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            model: std::env::var("GEN_MODEL")
                .ok()
                .filter(|model| !model.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            debug: std::env::var("APP_DEBUG")
                .map(|value| parse_bool_env(&value))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
    }

    #[test]
    fn test_parse_bool_env_accepts_common_truthy_values() {
        for value in ["1", "true", "Yes", " ON ", "y"] {
            assert!(parse_bool_env(value), "{value} should be truthy");
        }
        for value in ["0", "false", "off", ""] {
            assert!(!parse_bool_env(value), "{value} should be falsy");
        }
    }

    #[test]
    fn test_session_timeout_is_five_minutes() {
        assert_eq!(SESSION_TIMEOUT, Duration::from_secs(300));
    }
}
