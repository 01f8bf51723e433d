//! Resilient client for the generative language service.

use std::time::Duration;

use async_trait::async_trait;
use healthbot_core::{config::DEFAULT_MODEL, messages, Language};
use reqwest::Client;
use serde_json::json;

use crate::error::{GeminiError, Result};
use crate::prompt::build_prompt;
use crate::response::GenerateReply;

const MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Object-safe seam between the conversation engine and the remote
/// service, also implemented by test doubles.
#[async_trait]
pub trait GeminiAsk: Send + Sync {
    /// Ask the remote service for an answer in `lang`.
    ///
    /// Fails only after retries are exhausted. A missing credential or an
    /// empty reply degrades to the localized fallback text instead.
    async fn ask(&self, question: &str, lang: Language, health_only: bool) -> Result<String>;
}

/// Google Gemini `generateContent` client with bounded retry.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    backoff: Duration,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: DEFAULT_MODEL.to_string(),
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Set a custom base URL (e.g., for proxies or tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base retry delay, doubled after each failed attempt.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// One call attempt. `Ok(None)` means the service answered but no
    /// text could be extracted.
    async fn attempt(&self, api_key: &str, prompt: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let payload = response.text().await?;
        match serde_json::from_str::<GenerateReply>(&payload) {
            Ok(reply) => Ok(reply.into_text()),
            Err(err) => {
                tracing::warn!(error = %err, "unrecognized Gemini response shape");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl GeminiAsk for GeminiClient {
    async fn ask(&self, question: &str, lang: Language, health_only: bool) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!("no Gemini API key configured, skipping remote call");
            return Ok(messages::fallback(lang).to_string());
        };

        let prompt = build_prompt(question, lang, health_only);
        tracing::debug!(prompt_len = prompt.len(), health_only, "asking Gemini");

        let mut delay = self.backoff;
        for attempt in 1..=MAX_ATTEMPTS {
            match self.attempt(api_key, &prompt).await {
                Ok(Some(text)) => {
                    tracing::info!(attempt, reply_len = text.len(), "Gemini replied");
                    return Ok(text);
                }
                Ok(None) => {
                    tracing::warn!(attempt, "Gemini returned no text, falling back");
                    return Ok(messages::fallback(lang).to_string());
                }
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "Gemini attempt failed");
                    if attempt < MAX_ATTEMPTS {
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(GeminiError::Unavailable {
            attempts: MAX_ATTEMPTS,
        })
    }
}
