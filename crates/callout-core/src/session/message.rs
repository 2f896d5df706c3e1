//! Conversation message types.
//!
//! A [`VoiceMessage`] is one recognized or typed utterance plus its optional
//! translation. Messages are created once and never mutated afterwards; the
//! session log owns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a message was produced locally or received from a teammate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    /// Spoken or typed by the local user.
    Outgoing,
    /// Received from another participant.
    Incoming,
}

/// A single utterance in the conversation log.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceMessage {
    /// The recognized or typed text.
    pub text: String,
    /// ISO-ish language code of `text`.
    pub language: String,
    /// Whether the message was produced locally.
    pub direction: MessageDirection,
    /// Target-language rendering of `text`, when a translation succeeded.
    pub translation: Option<String>,
    /// Set once at construction.
    pub timestamp: DateTime<Utc>,
}

impl VoiceMessage {
    /// Creates a message with the timestamp set to now.
    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        direction: MessageDirection,
    ) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            direction,
            translation: None,
            timestamp: Utc::now(),
        }
    }

    /// Convenience constructor for a received message.
    pub fn incoming(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self::new(text, language, MessageDirection::Incoming)
    }

    /// Convenience constructor for a locally produced message.
    pub fn outgoing(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self::new(text, language, MessageDirection::Outgoing)
    }

    /// Attaches a translation at construction time.
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn is_outgoing(&self) -> bool {
        self.direction == MessageDirection::Outgoing
    }

    /// Number of whitespace-separated words in the original text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Converts to the transport representation used in session files.
    pub fn to_record(&self) -> MessageRecord {
        MessageRecord {
            text: self.text.clone(),
            language: self.language.clone(),
            is_outgoing: self.is_outgoing(),
            translation: self.translation.clone(),
            timestamp: self.timestamp.to_rfc3339(),
        }
    }

    /// Reconstructs a message from its transport representation.
    ///
    /// An unparsable timestamp falls back to now rather than failing the
    /// whole load.
    pub fn from_record(record: &MessageRecord) -> Self {
        let timestamp = DateTime::parse_from_rfc3339(&record.timestamp)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Self {
            text: record.text.clone(),
            language: record.language.clone(),
            direction: if record.is_outgoing {
                MessageDirection::Outgoing
            } else {
                MessageDirection::Incoming
            },
            translation: record.translation.clone(),
            timestamp,
        }
    }
}

/// Transport form of a [`VoiceMessage`] as stored in session files.
///
/// Fields missing from an on-disk record default: `language` to `"en"`,
/// `is_outgoing` to false, `translation` to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub is_outgoing: bool,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_fields() {
        let message = VoiceMessage::outgoing("gg wp", "en").with_translation("bien jugado");
        let restored = VoiceMessage::from_record(&message.to_record());

        assert_eq!(restored.text, "gg wp");
        assert_eq!(restored.language, "en");
        assert_eq!(restored.direction, MessageDirection::Outgoing);
        assert_eq!(restored.translation.as_deref(), Some("bien jugado"));
        // RFC 3339 keeps sub-second precision, so the timestamp survives exactly.
        assert_eq!(restored.timestamp, message.timestamp);
    }

    #[test]
    fn missing_fields_default() {
        let record: MessageRecord = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(record.language, "en");
        assert!(!record.is_outgoing);
        assert!(record.translation.is_none());

        let message = VoiceMessage::from_record(&record);
        assert_eq!(message.direction, MessageDirection::Incoming);
    }

    #[test]
    fn bad_timestamp_falls_back_to_now() {
        let record = MessageRecord {
            text: "hi".to_string(),
            language: "en".to_string(),
            is_outgoing: false,
            translation: None,
            timestamp: "not-a-timestamp".to_string(),
        };

        let before = Utc::now();
        let message = VoiceMessage::from_record(&record);
        assert!(message.timestamp >= before);
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(VoiceMessage::incoming("nice shot", "en").word_count(), 2);
        assert_eq!(VoiceMessage::incoming("", "en").word_count(), 0);
        assert_eq!(VoiceMessage::incoming("  gg  ", "en").word_count(), 1);
    }
}
