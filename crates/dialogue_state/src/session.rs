//! Per-user conversational session state.

use std::time::Duration;

use chrono::{DateTime, Utc};
use healthbot_core::Language;
use serde::{Deserialize, Serialize};

use crate::stage::{Mode, Stage};

/// Conversational progress for a single user, owned by the session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Language chosen or detected during `ChooseLanguage`.
    pub language: Option<Language>,

    /// State-machine position.
    pub stage: Stage,

    /// Local rule answers vs. remote delegation.
    pub mode: Mode,

    /// Inbound messages seen in this session.
    pub message_count: u32,

    /// Last activity timestamp, drives expiry.
    pub last_seen: DateTime<Utc>,

    /// Last condition matched by the rule matcher, if any.
    pub matched_condition: Option<String>,

    /// When the session entered assisted mode.
    pub assisted_since: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            language: None,
            stage: Stage::Greet,
            mode: Mode::RuleBased,
            message_count: 0,
            last_seen: Utc::now(),
            matched_condition: None,
            assisted_since: None,
        }
    }
}

impl Session {
    /// A session idle longer than `timeout` is treated as nonexistent.
    pub fn is_expired(&self, timeout: Duration) -> bool {
        let timeout = chrono::Duration::from_std(timeout).unwrap_or(chrono::Duration::MAX);
        Utc::now().signed_duration_since(self.last_seen) > timeout
    }

    /// Refresh the activity timestamp.
    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }

    /// The language to reply in; English before any selection happened.
    pub fn language_or_default(&self) -> Language {
        self.language.unwrap_or(Language::En)
    }

    /// Hand the session over to the remote service.
    ///
    /// Sticky: once assisted, the session stays assisted until it expires
    /// or the user exits. `assisted_since` is stamped only once.
    pub fn enter_assisted(&mut self) {
        self.mode = Mode::Assisted;
        self.stage = Stage::GeminiActive;
        if self.assisted_since.is_none() {
            self.assisted_since = Some(Utc::now());
        }
    }
}
