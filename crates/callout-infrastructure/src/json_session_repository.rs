//! JSON file SessionRepository implementation.

use async_trait::async_trait;
use callout_core::error::{CalloutError, Result};
use callout_core::session::{SessionRecord, SessionRepository};
use std::path::Path;

/// Stores each session as a single pretty-printed JSON file.
///
/// Parent directories are created on save. Paths are supplied by the caller;
/// this repository holds no directory state of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSessionRepository;

impl JsonSessionRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn save(&self, record: &SessionRecord, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        tokio::fs::write(path, json).await?;
        tracing::debug!("Saved session {} to {}", record.session_id, path.display());
        Ok(())
    }

    async fn load(&self, path: &Path) -> Result<SessionRecord> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|err| {
            CalloutError::io(format!("cannot read {}: {}", path.display(), err))
        })?;
        let record = serde_json::from_str(&contents)?;
        Ok(record)
    }
}
