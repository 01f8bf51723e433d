//! Prompt construction for the generative service.

use healthbot_core::Language;

const HEALTH_ONLY_PREAMBLE: &str = "Important: Only reply to health-related queries. If the user asks non-health questions, politely refuse and ask them to ask a health-related question. Keep the response brief and in the requested language.\n\n";

/// Build the constrained prompt sent to the model.
///
/// `health_only` prepends the refuse-and-redirect instruction used once a
/// session is in assisted mode.
pub fn build_prompt(user_text: &str, lang: Language, health_only: bool) -> String {
    let base = format!(
        "You are a helpful rural healthcare assistant. Answer concisely in the user's language ({}).\n\
         - Provide symptom analysis, first aid, preventive measures, and clear guidance on when to see a doctor.\n\
         - Use WHO-aligned, conservative health advice.\n\
         - Keep suggestions safe and encourage seeking medical attention for red flags.\n\n\
         User: {}\n",
        lang.code().to_uppercase(),
        user_text,
    );
    if health_only {
        format!("{HEALTH_ONLY_PREAMBLE}{base}")
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_language_and_question() {
        let prompt = build_prompt("I feel dizzy", Language::Hi, false);
        assert!(prompt.contains("(HI)"));
        assert!(prompt.contains("User: I feel dizzy"));
        assert!(!prompt.contains("Only reply to health-related queries"));
    }

    #[test]
    fn test_health_only_prepends_stronger_instruction() {
        let prompt = build_prompt("tell me a joke", Language::En, true);
        assert!(prompt.starts_with("Important: Only reply to health-related queries."));
        assert!(prompt.contains("User: tell me a joke"));
    }
}
