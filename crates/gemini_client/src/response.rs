//! Decoding of the finite set of known response shapes.
//!
//! The service has produced two shapes across SDK generations: a flat
//! object with a `text` field, and a candidate list with nested content.
//! Anything else is treated as an empty reply.

use serde::Deserialize;

/// The response shapes the service is known to produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenerateReply {
    /// Flat shape carrying the text directly.
    Direct { text: String },
    /// Candidate list with nested content.
    Candidates { candidates: Vec<Candidate> },
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    /// Current API shape: a list of text parts.
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Older flat shape nested under content.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateReply {
    /// Extract the first non-empty text, if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            GenerateReply::Direct { text } => non_empty(text),
            GenerateReply::Candidates { candidates } => {
                candidates.into_iter().find_map(|candidate| {
                    let CandidateContent { parts, text } = candidate.content?;
                    parts
                        .into_iter()
                        .find_map(|part| part.text.and_then(non_empty))
                        .or_else(|| text.and_then(non_empty))
                })
            }
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
