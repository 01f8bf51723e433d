//! Remote answer client error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// All retry attempts failed; the caller degrades to the localized
    /// fallback text.
    #[error("Gemini unavailable after {attempts} attempts")]
    Unavailable { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, GeminiError>;
