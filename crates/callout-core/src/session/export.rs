//! Export formats and the exporter trait.

use super::model::SessionRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Transcript export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Html,
    Json,
    Pdf,
    Csv,
}

impl ExportFormat {
    /// Parses a format name. Unknown names fall back to [`ExportFormat::Text`]
    /// rather than failing; the caller gets a readable transcript either way.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            "html" => Self::Html,
            "json" => Self::Json,
            "pdf" => Self::Pdf,
            "csv" => Self::Csv,
            other => {
                tracing::warn!("Unknown export format '{}', using text", other);
                Self::Text
            }
        }
    }

    /// File extension for the format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
            Self::Json => "json",
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

/// Writes a session record to a file in one of the supported formats.
///
/// Implemented by the infrastructure crate; the session manager only decides
/// when to export and where.
#[async_trait]
pub trait SessionExporter: Send + Sync {
    async fn export(&self, record: &SessionRecord, format: ExportFormat, path: &Path)
        -> Result<()>;
}
