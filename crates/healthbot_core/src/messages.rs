//! Localized fixed texts of the rule-based flow.

use crate::knowledge::Condition;
use crate::language::Language;

/// Exact greeting keywords that restart the flow.
pub const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "namaste", "नमस्ते"];

/// Exit phrases; matched on equality or as a leading word.
pub const EXIT_WORDS: &[&str] = &[
    "bye",
    "no",
    "thanks",
    "thank you",
    "नहीं",
    "धन्यवाद",
    "stop",
    "exit",
];

/// Language-selection prompt listing all supported languages.
pub const LANGUAGE_PROMPT: &str = "👋 Welcome! कृपया भाषा निवडा | ভাষা নির্বাচন করুন | Please choose your language:\n[हिंदी | English | मराठी | বাংলা]";

/// Fixed closing notice returned on an exit command.
pub const CONVERSATION_ENDED: &str = "Conversation ended. You can say 'Hello' to start again.";

/// Default query for the nearby-resources link.
pub const NEARBY_QUERY: &str = "health center near me";

/// Localized "how can I help" greeting shown after language selection.
pub fn greeting(lang: Language) -> &'static str {
    match lang {
        Language::Hi => "कैसे मदद कर सकता हूँ?",
        Language::En => "How can I help you today?",
        Language::Mr => "मी तुम्हाला कशी मदत करू शकतो?",
        Language::Bn => "আমি কীভাবে সাহায্য করতে পারি?",
    }
}

/// Localized prompt asking the user to specify symptoms.
pub fn clarify_prompt(lang: Language) -> &'static str {
    match lang {
        Language::Hi => "कृपया लक्षण स्पष्ट करें।",
        Language::En => "Could you please specify your symptoms?",
        Language::Mr => "कृपया लक्षण स्पष्ट करा.",
        Language::Bn => "আপনার উপসর্গগুলি নির্দিষ্ট করুন।",
    }
}

/// Localized apology used whenever a remote answer cannot be produced.
pub fn fallback(lang: Language) -> &'static str {
    match lang {
        Language::Hi => "माफ़ कीजिए, अभी जवाब नहीं दे पा रहे हैं। कृपया बाद में प्रयास करें।",
        Language::Mr => "माफ करा, सध्या उत्तर देऊ शकत नाही. कृपया नंतर प्रयत्न करा.",
        Language::Bn => "দুঃখিত, এখন উত্তর দিতে পারছি না। পরে আবার চেষ্টা করুন।",
        Language::En => "Sorry, I couldn't process that right now. Please try again later.",
    }
}

/// Localized doctor-consult follow-up appended to a matched advice block.
pub fn doctor_followup(lang: Language) -> &'static str {
    match lang {
        Language::Hi => "क्या आप डॉक्टर से मिलना चाहेंगे?",
        Language::En => "Would you like to consult a doctor?",
        Language::Mr => "तुम्हाला डॉक्टरांचा सल्ला हवा आहे का?",
        Language::Bn => "আপনি কি একজন ডাক্তারের সাথে পরামর্শ করতে চান?",
    }
}

/// Compose the localized advice block for a matched condition.
pub fn advice_block(condition: &Condition, lang: Language) -> String {
    format!(
        "🩺 Based on your symptoms, it may be {}.\n\nFirst Aid: {}\nPreventive Measures: {}\nWhen to Consult a Doctor: {}",
        condition.id,
        condition.first_aid.get(lang),
        condition.preventive.get(lang),
        condition.consult.get(lang),
    )
}

/// Google Maps search URL for nearby health resources.
pub fn maps_link(query: &str) -> String {
    format!("https://www.google.com/maps/search/{}", query.replace(' ', "+"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::CONDITION_GUIDE;

    #[test]
    fn test_maps_link_encodes_spaces() {
        assert_eq!(
            maps_link("health center near me"),
            "https://www.google.com/maps/search/health+center+near+me"
        );
    }

    #[test]
    fn test_advice_block_layout() {
        let block = advice_block(&CONDITION_GUIDE[0], Language::En);
        assert!(block.starts_with("🩺 Based on your symptoms, it may be fever."));
        assert!(block.contains("First Aid: Rest, drink fluids, take paracetamol."));
        assert!(block.contains("Preventive Measures: Avoid crowded places"));
        assert!(block.contains("When to Consult a Doctor: Consult doctor if fever lasts >3 days."));
    }

    #[test]
    fn test_language_prompt_lists_all_languages() {
        for name in ["हिंदी", "English", "मराठी", "বাংলা"] {
            assert!(LANGUAGE_PROMPT.contains(name));
        }
    }
}
