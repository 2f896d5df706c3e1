//! Plain-text transcript rendering.

use callout_core::session::{MessageRecord, SessionRecord};
use chrono::DateTime;

/// Speaker label shown for a message.
pub(crate) fn speaker(message: &MessageRecord) -> &'static str {
    if message.is_outgoing {
        "You"
    } else {
        "Teammate"
    }
}

/// Clock portion of a stored timestamp, in the offset it was recorded with.
/// Unparsable timestamps are shown verbatim.
pub(crate) fn clock(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Renders the whole session as a plain-text transcript.
pub(crate) fn render(record: &SessionRecord) -> String {
    let mut out = String::new();
    out.push_str("Voice Chat Session Transcript\n");
    out.push_str(&format!("Session: {}\n", record.session_id));
    out.push_str(&format!("Started: {}\n", record.start_time));
    out.push_str(&format!("Ended: {}\n", record.end_time));
    out.push_str(&format!("Messages: {}\n", record.stats.total_messages));
    out.push_str("----------------------------------------\n\n");

    for message in &record.messages {
        out.push_str(&format!(
            "[{}] {} ({}): {}\n",
            clock(&message.timestamp),
            speaker(message),
            message.language,
            message.text
        ));
        if let Some(ref translation) = message.translation {
            out.push_str(&format!("    → {}\n", translation));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use callout_core::session::{MessageDirection, VoiceMessage};

    #[test]
    fn transcript_contains_header_and_messages() {
        let mut record = SessionRecord {
            session_id: "20260826_140000".to_string(),
            start_time: "2026-08-26T14:00:00+00:00".to_string(),
            end_time: "2026-08-26T14:05:00+00:00".to_string(),
            ..Default::default()
        };
        let outgoing = VoiceMessage::new("push mid", "en", MessageDirection::Outgoing)
            .with_translation("empuja al medio");
        let incoming = VoiceMessage::new("voy", "es", MessageDirection::Incoming);
        record.stats.record(&outgoing);
        record.stats.record(&incoming);
        record.messages.push(outgoing.to_record());
        record.messages.push(incoming.to_record());

        let text = render(&record);
        assert!(text.starts_with("Voice Chat Session Transcript\n"));
        assert!(text.contains("Session: 20260826_140000"));
        assert!(text.contains("Started: 2026-08-26T14:00:00+00:00"));
        assert!(text.contains("Ended: 2026-08-26T14:05:00+00:00"));
        assert!(text.contains("Messages: 2"));
        assert!(text.contains("You (en): push mid"));
        assert!(text.contains("    → empuja al medio"));
        assert!(text.contains("Teammate (es): voy"));
    }

    #[test]
    fn unparsable_timestamp_is_rendered_verbatim() {
        assert_eq!(clock("yesterday"), "yesterday");
        assert_eq!(clock("2026-08-26T14:03:09+02:00"), "14:03:09");
    }
}
