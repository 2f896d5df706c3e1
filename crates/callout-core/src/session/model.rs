//! Persisted session record.
//!
//! This is the structured record written by `save_session` and read by
//! `load_session`; the JSON export is this exact shape, and the other export
//! formats are projections of the same fields.

use super::message::MessageRecord;
use super::stats::SessionStats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// On-disk form of one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    /// ISO 8601.
    pub start_time: String,
    /// ISO 8601, captured when the record was produced.
    pub end_time: String,
    #[serde(default)]
    pub stats: SessionStats,
    /// Participant identifier -> language code. Informational.
    #[serde(default)]
    pub user_languages: HashMap<String, String>,
    #[serde(default)]
    pub messages: Vec<MessageRecord>,
}
