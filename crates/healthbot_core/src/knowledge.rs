//! Static condition guide and symptom keyword matching.

use crate::language::Language;

/// Advice text in each supported language.
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub en: &'static str,
    pub hi: &'static str,
    pub mr: &'static str,
    pub bn: &'static str,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Hi => self.hi,
            Language::Mr => self.mr,
            Language::Bn => self.bn,
        }
    }
}

/// One entry of the condition guide.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    pub id: &'static str,
    pub symptoms: &'static [&'static str],
    pub first_aid: Localized,
    pub preventive: Localized,
    pub consult: Localized,
}

/// Immutable condition guide, shared read-only by all sessions.
/// Declaration order is the match precedence order.
pub static CONDITION_GUIDE: &[Condition] = &[
    Condition {
        id: "fever",
        symptoms: &["fever", "temperature", "chills", "headache"],
        first_aid: Localized {
            en: "Rest, drink fluids, take paracetamol.",
            hi: "आराम करें, पानी पिएं, पैरासिटामोल लें।",
            mr: "आराम करा, पाणी प्या, पॅरासिटामोल घ्या.",
            bn: "বিশ্রাম নিন, পানি পান করুন, প্যারাসিটামল নিন।",
        },
        preventive: Localized {
            en: "Avoid crowded places, monitor temperature.",
            hi: "भीड़ से बचें, तापमान जांचें।",
            mr: "गर्दी टाळा, तापमान तपासा.",
            bn: "ভিড় এড়িয়ে চলুন, তাপমাত্রা পরীক্ষা করুন।",
        },
        consult: Localized {
            en: "Consult doctor if fever lasts >3 days.",
            hi: "अगर बुखार 3 दिन से ज़्यादा हो तो डॉक्टर से मिलें।",
            mr: "ताप तीन दिवसांपेक्षा जास्त टिकल्यास डॉक्टरांचा सल्ला घ्या.",
            bn: "জ্বর ৩ দিনের বেশি হলে ডাক্তার দেখান।",
        },
    },
    Condition {
        id: "cold",
        symptoms: &["cold", "runny nose", "sneezing", "blocked nose"],
        first_aid: Localized {
            en: "Rest, steam inhalation, drink warm fluids.",
            hi: "आराम करें, भाप लें, गर्म तरल पदार्थ पिएं।",
            mr: "आराम करा, वाफ घ्या, गरम पेये प्या.",
            bn: "বিশ্রাম নিন, ভাপ নিন, গরম তরল পান করুন।",
        },
        preventive: Localized {
            en: "Avoid cold exposure, wash hands regularly.",
            hi: "ठंड से बचें, हाथ धोते रहें।",
            mr: "थंडीपासून बचाव करा, हात स्वच्छ ठेवा.",
            bn: "ঠান্ডা থেকে দূরে থাকুন, নিয়মিত হাত ধুয়ে ফেলুন।",
        },
        consult: Localized {
            en: "Consult doctor if symptoms persist >5 days.",
            hi: "अगर लक्षण 5 दिन से ज़्यादा रहें तो डॉक्टर से मिलें।",
            mr: "लक्षण ५ दिवसांपेक्षा जास्त टिकल्यास डॉक्टरांचा सल्ला घ्या.",
            bn: "উপসর্গ ৫ দিনের বেশি থাকলে ডাক্তার দেখান।",
        },
    },
];

/// Case-insensitive substring scan over the guide.
///
/// The first condition in declaration order with any matching symptom
/// keyword wins; keyword specificity does not break ties.
pub fn match_condition(text: &str) -> Option<&'static Condition> {
    let normalized = text.to_lowercase();
    CONDITION_GUIDE.iter().find(|condition| {
        condition
            .symptoms
            .iter()
            .any(|symptom| normalized.contains(&symptom.to_lowercase()))
    })
}
