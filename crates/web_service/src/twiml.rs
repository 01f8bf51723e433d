//! Twilio-compatible XML reply envelope.

use serde::Serialize;

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// The messaging-gateway callback envelope: one `<Message>` per reply.
#[derive(Debug, Serialize)]
#[serde(rename = "Response")]
pub struct MessagingResponse {
    #[serde(rename = "Message")]
    message: String,
}

impl MessagingResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Render the full XML document.
    pub fn to_xml(&self) -> String {
        match quick_xml::se::to_string(self) {
            Ok(body) => format!("{XML_DECL}{body}"),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize reply envelope");
                format!("{XML_DECL}<Response/>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_layout() {
        let xml = MessagingResponse::new("How can I help you today?").to_xml();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>How can I help you today?</Message></Response>"
        );
    }

    #[test]
    fn test_reply_text_is_escaped() {
        let xml = MessagingResponse::new("Rest & drink <warm> fluids").to_xml();
        assert!(xml.contains("Rest &amp; drink &lt;warm&gt; fluids"));
    }

    #[test]
    fn test_multiline_reply_survives() {
        let xml = MessagingResponse::new("line one\n\nline two").to_xml();
        assert!(xml.contains("line one\n\nline two"));
    }
}
