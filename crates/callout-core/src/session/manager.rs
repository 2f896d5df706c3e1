//! Session lifecycle management.
//!
//! `SessionManager` owns the ordered message log for one run of the
//! application, keeps running statistics, and drives save/load/export through
//! the repository and exporter traits. Expected failures (missing file,
//! malformed record, I/O error) are logged and surfaced as `false`, never
//! raised; a failed save/load/export must not corrupt the in-memory session.

use super::export::{ExportFormat, SessionExporter};
use super::message::VoiceMessage;
use super::model::SessionRecord;
use super::repository::SessionRepository;
use super::stats::{format_duration, SessionReport, SessionStats};
use crate::config::SessionConfig;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Mutable session state, owned by the manager behind a single lock.
struct SessionState {
    session_id: String,
    start_time: DateTime<Utc>,
    user_languages: HashMap<String, String>,
    messages: Vec<VoiceMessage>,
    stats: SessionStats,
}

impl SessionState {
    fn fresh() -> Self {
        let now = Utc::now();
        Self {
            session_id: now.format("%Y%m%d_%H%M%S").to_string(),
            start_time: now,
            user_languages: HashMap::new(),
            messages: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    /// Point-in-time copy of the session as a persistable record.
    fn to_record(&self) -> SessionRecord {
        SessionRecord {
            session_id: self.session_id.clone(),
            start_time: self.start_time.to_rfc3339(),
            end_time: Utc::now().to_rfc3339(),
            stats: self.stats.clone(),
            user_languages: self.user_languages.clone(),
            messages: self.messages.iter().map(|m| m.to_record()).collect(),
        }
    }
}

/// Manages the conversation log, statistics, persistence and export for one
/// session.
pub struct SessionManager {
    state: Arc<RwLock<SessionState>>,
    repository: Arc<dyn SessionRepository>,
    exporter: Arc<dyn SessionExporter>,
    config: SessionConfig,
    autosave: StdMutex<Option<CancellationToken>>,
}

impl SessionManager {
    /// Creates a new manager with a fresh session.
    ///
    /// When `config.auto_save` is set, a background autosave task is started
    /// immediately; construction therefore expects a tokio runtime.
    pub fn new(
        config: SessionConfig,
        repository: Arc<dyn SessionRepository>,
        exporter: Arc<dyn SessionExporter>,
    ) -> Self {
        let state = SessionState::fresh();
        tracing::info!("Session manager initialized with ID: {}", state.session_id);

        let manager = Self {
            state: Arc::new(RwLock::new(state)),
            repository,
            exporter,
            config,
            autosave: StdMutex::new(None),
        };

        if manager.config.auto_save {
            manager.start_auto_save();
        }

        manager
    }

    /// Appends a message to the log and folds it into the running stats.
    ///
    /// Returns the stored message for chaining. Never fails.
    pub async fn add_message(&self, message: VoiceMessage) -> VoiceMessage {
        let mut state = self.state.write().await;
        state.stats.record(&message);
        state.messages.push(message.clone());
        tracing::debug!(
            "Added message ({} total): {:.30}",
            state.messages.len(),
            message.text
        );
        message
    }

    /// Records which language a participant speaks. Informational only.
    pub async fn set_user_language(
        &self,
        participant: impl Into<String>,
        language: impl Into<String>,
    ) {
        let mut state = self.state.write().await;
        state.user_languages.insert(participant.into(), language.into());
    }

    /// Current session identifier.
    pub async fn session_id(&self) -> String {
        self.state.read().await.session_id.clone()
    }

    /// Snapshot of the current message log.
    pub async fn messages(&self) -> Vec<VoiceMessage> {
        self.state.read().await.messages.clone()
    }

    /// Snapshot of the participant-language map.
    pub async fn user_languages(&self) -> HashMap<String, String> {
        self.state.read().await.user_languages.clone()
    }

    /// Saves the session to `path`, or to the default per-session file under
    /// the configured sessions directory.
    ///
    /// Returns false (logged, not raised) when there is nothing to save or
    /// the write fails.
    pub async fn save_session(&self, path: Option<&Path>) -> bool {
        save_snapshot(&self.state, &self.repository, &self.config, path).await
    }

    /// Replaces the in-memory session from a record at `path`.
    ///
    /// Returns false on any read or parse error, leaving the prior state
    /// untouched.
    pub async fn load_session(&self, path: &Path) -> bool {
        let record = match self.repository.load(path).await {
            Ok(record) => record,
            Err(err) => {
                tracing::error!("Error loading session from {}: {}", path.display(), err);
                return false;
            }
        };

        let messages: Vec<VoiceMessage> =
            record.messages.iter().map(VoiceMessage::from_record).collect();

        let mut state = self.state.write().await;
        if !record.session_id.is_empty() {
            state.session_id = record.session_id;
        }
        if let Ok(start) = DateTime::parse_from_rfc3339(&record.start_time) {
            state.start_time = start.with_timezone(&Utc);
        }
        state.user_languages = record.user_languages;
        state.stats = record.stats;
        state.messages = messages;

        tracing::info!(
            "Session loaded from {} with {} messages",
            path.display(),
            state.messages.len()
        );
        true
    }

    /// Exports the session to `path` (or a default filename under the
    /// configured export directory) in the given format.
    ///
    /// Returns false when there is nothing to export or the serializer fails.
    pub async fn export_session(&self, format: ExportFormat, path: Option<&Path>) -> bool {
        let record = {
            let state = self.state.read().await;
            if state.messages.is_empty() {
                tracing::info!("No messages to export");
                return false;
            }
            state.to_record()
        };

        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.config.exports_dir().join(format!(
                "export_{}.{}",
                record.session_id,
                format.extension()
            )),
        };

        match self.exporter.export(&record, format, &path).await {
            Ok(()) => {
                tracing::info!("Session exported as {:?} to {}", format, path.display());
                true
            }
            Err(err) => {
                tracing::error!("Error exporting session as {:?}: {}", format, err);
                false
            }
        }
    }

    /// Computed statistics for the session so far.
    pub async fn get_stats(&self) -> SessionReport {
        let state = self.state.read().await;
        let end_time = Utc::now();
        let duration = end_time - state.start_time;
        let duration_seconds = duration.num_milliseconds() as f64 / 1000.0;

        let messages_per_minute = if duration_seconds > 0.0 {
            let raw = state.stats.total_messages as f64 / duration_seconds * 60.0;
            (raw * 100.0).round() / 100.0
        } else {
            0.0
        };

        SessionReport {
            session_id: state.session_id.clone(),
            start_time: state.start_time,
            end_time,
            duration_seconds,
            duration_formatted: format_duration(duration.num_seconds()),
            total_messages: state.stats.total_messages,
            outgoing_messages: state.stats.outgoing_messages,
            incoming_messages: state.stats.incoming_messages,
            messages_per_minute,
            languages: state.stats.languages.clone(),
            word_count: state.stats.word_count,
        }
    }

    /// Discards the log and starts a fresh session with a new ID and start
    /// time. The participant-language map carries over; the same people are
    /// still in the call. In-memory only; callers wanting persistence save
    /// first.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        let user_languages = std::mem::take(&mut state.user_languages);
        *state = SessionState::fresh();
        state.user_languages = user_languages;
        tracing::info!("Session cleared, new session ID: {}", state.session_id);
    }

    /// Starts the background autosave task if it is not already running.
    ///
    /// The task sleeps for the configured interval, saves, and reschedules
    /// itself, so the period drifts by the duration of each save.
    pub fn start_auto_save(&self) {
        let mut autosave = self.autosave.lock().unwrap();
        if autosave.is_some() {
            return;
        }

        let token = CancellationToken::new();
        let task_token = token.clone();
        let state = Arc::clone(&self.state);
        let repository = Arc::clone(&self.repository);
        let config = self.config.clone();
        let interval = Duration::from_secs(config.auto_save_interval_secs.max(1));

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = tokio::time::sleep(interval) => {
                        save_snapshot(&state, &repository, &config, None).await;
                    }
                }
            }
        });

        *autosave = Some(token);
        tracing::info!(
            "Auto-save enabled with {}s interval",
            self.config.auto_save_interval_secs
        );
    }

    /// Cancels the pending autosave. Safe to call when never started.
    pub fn stop_auto_save(&self) {
        if let Some(token) = self.autosave.lock().unwrap().take() {
            token.cancel();
            tracing::info!("Auto-save stopped");
        }
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        if let Some(token) = self.autosave.lock().unwrap().take() {
            token.cancel();
        }
    }
}

/// Serializes a point-in-time snapshot of the session to disk.
///
/// Shared between `save_session` and the autosave task. Takes the snapshot
/// under a read lock and releases it before any I/O.
async fn save_snapshot(
    state: &Arc<RwLock<SessionState>>,
    repository: &Arc<dyn SessionRepository>,
    config: &SessionConfig,
    path: Option<&Path>,
) -> bool {
    let record = {
        let state = state.read().await;
        if state.messages.is_empty() {
            tracing::info!("No messages to save");
            return false;
        }
        state.to_record()
    };

    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => config
            .sessions_dir()
            .join(format!("session_{}.json", record.session_id)),
    };

    match repository.save(&record, &path).await {
        Ok(()) => {
            tracing::info!("Session saved to {}", path.display());
            true
        }
        Err(err) => {
            tracing::error!("Error saving session: {}", err);
            false
        }
    }
}
