//! Per-message conversation logic.

use std::sync::Arc;

use dialogue_state::{Mode, Session, Stage};
use gemini_client::GeminiAsk;
use healthbot_core::{detect, knowledge, messages, Language};
use session_store::SessionStore;

/// Rule-based message count at which the defensive branch forces the
/// handoff to the remote service.
const FORCED_HANDOFF_THRESHOLD: u32 = 10;

/// The conversation state engine.
///
/// Holds the session store and the remote answer client behind their
/// seams; one instance serves all users.
pub struct DialogueEngine {
    store: Arc<SessionStore>,
    gemini: Arc<dyn GeminiAsk>,
}

impl DialogueEngine {
    pub fn new(store: Arc<SessionStore>, gemini: Arc<dyn GeminiAsk>) -> Self {
        Self { store, gemini }
    }

    /// Produce one outbound reply for one inbound message.
    ///
    /// The whole read-modify-write runs under the user's gate, so racing
    /// deliveries for the same user are serialized.
    pub async fn respond(&self, user_id: &str, body: &str) -> String {
        let normalized = body.trim().to_lowercase();
        tracing::info!(user_id, "processing inbound message");

        let _gate = self.store.lock_user(user_id).await;

        let mut session = self.store.get_or_create(user_id).await;
        session.message_count += 1;
        session.touch();
        self.store.save(user_id, session.clone()).await;

        // Exit is honored in every state, including assisted mode.
        if is_exit(&normalized) {
            self.store.remove(user_id).await;
            tracing::info!(user_id, "user requested exit");
            return messages::CONVERSATION_ENDED.to_string();
        }

        if session.mode == Mode::Assisted {
            return self.assisted_reply(user_id, session, body).await;
        }

        self.rule_based_reply(user_id, session, body, &normalized).await
    }

    /// Assisted mode: every non-exit message goes straight to the remote
    /// service with the health-only instruction.
    async fn assisted_reply(&self, user_id: &str, mut session: Session, body: &str) -> String {
        let lang = session.language_or_default();
        match self.gemini.ask(body, lang, true).await {
            Ok(reply) => {
                session.enter_assisted();
                self.store.save(user_id, session).await;
                with_resources_link(&reply, true)
            }
            Err(err) => {
                tracing::warn!(user_id, error = %err, "remote reply failed in assisted mode");
                messages::fallback(lang).to_string()
            }
        }
    }

    async fn rule_based_reply(
        &self,
        user_id: &str,
        mut session: Session,
        body: &str,
        normalized: &str,
    ) -> String {
        // A greeting restarts the flow from language selection, wherever
        // the session currently is.
        if messages::GREETING_WORDS.contains(&normalized) || session.stage == Stage::Greet {
            session.language = None;
            session.stage = Stage::ChooseLanguage;
            session.mode = Mode::RuleBased;
            self.store.save(user_id, session).await;
            return messages::LANGUAGE_PROMPT.to_string();
        }

        match session.stage {
            Stage::ChooseLanguage => {
                // Explicit language-name keywords win over detection.
                let lang = Language::from_choice(body).unwrap_or_else(|| detect::resolve(body));
                tracing::debug!(user_id, lang = %lang, "language selected");
                session.language = Some(lang);
                session.stage = Stage::AskSymptom;
                self.store.save(user_id, session).await;
                messages::greeting(lang).to_string()
            }
            Stage::AskSymptom => {
                let lang = session.language_or_default();
                session.stage = Stage::Clarify;
                self.store.save(user_id, session).await;
                messages::clarify_prompt(lang).to_string()
            }
            Stage::Clarify => self.clarify_reply(user_id, session, body).await,
            // Unreachable through correct transitions; kept as a safety net.
            Stage::Greet | Stage::GeminiActive => {
                self.defensive_reply(user_id, session, body).await
            }
        }
    }

    /// Clarify: match the symptom text against the condition guide, or
    /// hand off to the remote service.
    async fn clarify_reply(&self, user_id: &str, mut session: Session, body: &str) -> String {
        let lang = session.language_or_default();
        let matched = knowledge::match_condition(body);
        session.matched_condition = matched.map(|condition| condition.id.to_string());

        if let Some(condition) = matched {
            session.enter_assisted();
            self.store.save(user_id, session).await;
            return format!(
                "{}\n\n{}\n\n🗺️ Nearby health centers: {}",
                messages::advice_block(condition, lang),
                messages::doctor_followup(lang),
                messages::maps_link(messages::NEARBY_QUERY),
            );
        }

        match self.gemini.ask(body, lang, false).await {
            Ok(reply) => {
                session.enter_assisted();
                self.store.save(user_id, session).await;
                with_resources_link(&reply, false)
            }
            Err(err) => {
                // No transition on failure; the user can try again.
                self.store.save(user_id, session).await;
                tracing::warn!(user_id, error = %err, "remote reply failed during clarify");
                messages::fallback(lang).to_string()
            }
        }
    }

    /// Defensive branch for stage/mode combinations no correct transition
    /// produces.
    async fn defensive_reply(&self, user_id: &str, mut session: Session, body: &str) -> String {
        let lang = session.language_or_default();

        if session.message_count >= FORCED_HANDOFF_THRESHOLD {
            tracing::info!(
                user_id,
                count = session.message_count,
                "forcing handoff to remote service"
            );
            session.enter_assisted();
            self.store.save(user_id, session).await;
            return match self.gemini.ask(body, lang, true).await {
                Ok(reply) => with_resources_link(&reply, false),
                Err(err) => {
                    tracing::warn!(user_id, error = %err, "remote reply failed on forced handoff");
                    messages::fallback(lang).to_string()
                }
            };
        }

        // One-off remote answer without a mode change.
        match self.gemini.ask(body, lang, false).await {
            Ok(reply) => with_resources_link(&reply, false),
            Err(err) => {
                tracing::warn!(user_id, error = %err, "one-off remote reply failed");
                messages::fallback(lang).to_string()
            }
        }
    }
}

/// Append the nearby-resources link to a remote reply.
fn with_resources_link(reply: &str, labeled: bool) -> String {
    let link = messages::maps_link(messages::NEARBY_QUERY);
    if labeled {
        format!("{reply}\n\n🗺️ Nearby health centers: {link}")
    } else {
        format!("{reply}\n\n🗺️ {link}")
    }
}

/// Exit phrases match on equality or as the leading word.
fn is_exit(normalized: &str) -> bool {
    messages::EXIT_WORDS
        .iter()
        .any(|word| normalized == *word || normalized.starts_with(&format!("{word} ")))
}
