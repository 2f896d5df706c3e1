//! Session repository trait.
//!
//! Defines the interface for session persistence, decoupling the session
//! manager from the storage mechanism (JSON files in the default
//! infrastructure implementation).

use super::model::SessionRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// An abstract store for session records.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Writes a session record to `path`, creating parent directories as
    /// needed.
    async fn save(&self, record: &SessionRecord, path: &Path) -> Result<()>;

    /// Reads a session record from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed;
    /// the caller decides how to surface that.
    async fn load(&self, path: &Path) -> Result<SessionRecord>;
}
