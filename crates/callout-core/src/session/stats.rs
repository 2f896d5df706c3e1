//! Session statistics.
//!
//! [`SessionStats`] is maintained incrementally on every append so querying
//! is O(1), and must always equal a fresh recomputation over the message log.

use super::message::VoiceMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running aggregate over a session's message log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    pub total_messages: usize,
    pub outgoing_messages: usize,
    pub incoming_messages: usize,
    /// Language code -> number of messages in that language.
    pub languages: HashMap<String, usize>,
    /// Cumulative word count over original texts.
    pub word_count: usize,
}

impl SessionStats {
    /// Folds one appended message into the aggregate.
    pub fn record(&mut self, message: &VoiceMessage) {
        self.total_messages += 1;
        if message.is_outgoing() {
            self.outgoing_messages += 1;
        } else {
            self.incoming_messages += 1;
        }
        *self.languages.entry(message.language.clone()).or_insert(0) += 1;
        self.word_count += message.word_count();
    }

    /// Recomputes the aggregate from scratch.
    ///
    /// The incremental value must equal this at every point in time; tests
    /// hold the manager to that.
    pub fn recompute(messages: &[VoiceMessage]) -> Self {
        let mut stats = Self::default();
        for message in messages {
            stats.record(message);
        }
        stats
    }
}

/// Snapshot returned by `SessionManager::get_stats`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub session_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_seconds: f64,
    pub duration_formatted: String,
    pub total_messages: usize,
    pub outgoing_messages: usize,
    pub incoming_messages: usize,
    pub messages_per_minute: f64,
    pub languages: HashMap<String, usize>,
    pub word_count: usize,
}

/// Renders a duration as `"{h}h {m}m {s}s"`, dropping leading zero
/// components: `"45s"`, `"3m 2s"`, `"1h 2m 3s"`.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremental_matches_recompute() {
        let messages = vec![
            VoiceMessage::outgoing("gg", "en").with_translation("bien jugado"),
            VoiceMessage::outgoing("nice shot", "en"),
            VoiceMessage::incoming("buena jugada", "es"),
            VoiceMessage::incoming("one more round please", "en"),
        ];

        let mut incremental = SessionStats::default();
        for (i, message) in messages.iter().enumerate() {
            incremental.record(message);
            assert_eq!(incremental, SessionStats::recompute(&messages[..=i]));
        }

        assert_eq!(incremental.total_messages, 4);
        assert_eq!(incremental.outgoing_messages, 2);
        assert_eq!(incremental.incoming_messages, 2);
        assert_eq!(incremental.languages["en"], 3);
        assert_eq!(incremental.languages["es"], 1);
        assert_eq!(incremental.word_count, 2 + 2 + 2 + 4);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(182), "3m 2s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
        assert_eq!(format_duration(3723), "1h 2m 3s");
        assert_eq!(format_duration(0), "0s");
    }
}
