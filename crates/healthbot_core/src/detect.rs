//! Automatic language detection with an unconditional English fallback.

use whatlang::Lang;

use crate::language::Language;

/// Detect the language of `text`.
///
/// Never fails outward: detection failure or a language outside the
/// supported set resolves to English.
pub fn resolve(text: &str) -> Language {
    match whatlang::detect(text) {
        Some(info) => match info.lang() {
            Lang::Eng => Language::En,
            Lang::Hin => Language::Hi,
            Lang::Mar => Language::Mr,
            Lang::Ben => Language::Bn,
            other => {
                tracing::debug!(detected = other.code(), "unsupported language, defaulting to en");
                Language::En
            }
        },
        None => {
            tracing::debug!("language detection failed, defaulting to en");
            Language::En
        }
    }
}
