//! Session transcript exporters.
//!
//! [`FileExporter`] implements the core [`SessionExporter`] trait for every
//! [`ExportFormat`]. Text, HTML, JSON, and CSV are rendered in-process; PDF
//! is delegated to an optional injected [`PdfRenderer`].

mod csv;
mod html;
mod pdf;
mod text;

pub use pdf::PdfRenderer;

use async_trait::async_trait;
use callout_core::error::{CalloutError, Result};
use callout_core::session::{ExportFormat, SessionExporter, SessionRecord};
use std::path::Path;
use std::sync::Arc;

/// File-writing exporter covering all supported formats.
#[derive(Default)]
pub struct FileExporter {
    pdf_renderer: Option<Arc<dyn PdfRenderer>>,
}

impl FileExporter {
    /// Creates an exporter without PDF support.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exporter that delegates PDF output to `renderer`.
    pub fn with_pdf_renderer(renderer: Arc<dyn PdfRenderer>) -> Self {
        Self {
            pdf_renderer: Some(renderer),
        }
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, contents).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionExporter for FileExporter {
    async fn export(
        &self,
        record: &SessionRecord,
        format: ExportFormat,
        path: &Path,
    ) -> Result<()> {
        match format {
            ExportFormat::Text => self.write(path, &text::render(record)).await?,
            ExportFormat::Html => self.write(path, &html::render(record)).await?,
            ExportFormat::Csv => self.write(path, &csv::render(record)).await?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(record)?;
                self.write(path, &json).await?;
            }
            ExportFormat::Pdf => match &self.pdf_renderer {
                Some(renderer) => {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            tokio::fs::create_dir_all(parent).await?;
                        }
                    }
                    renderer.render(record, path)?;
                }
                None => {
                    return Err(CalloutError::backend_unavailable("pdf export", "pdf"));
                }
            },
        }
        tracing::info!("Exported session {} to {}", record.session_id, path.display());
        Ok(())
    }
}
