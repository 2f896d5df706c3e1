//! PDF rendering capability.
//!
//! PDF generation needs a rendering engine this crate does not ship. The
//! trait is the seam: hosts that bundle a renderer inject one, everyone else
//! gets a clean unavailability error from [`FileExporter`].
//!
//! [`FileExporter`]: super::FileExporter

use callout_core::error::Result;
use callout_core::session::SessionRecord;
use std::path::Path;

/// Renders a session transcript to a PDF file.
pub trait PdfRenderer: Send + Sync {
    fn render(&self, record: &SessionRecord, path: &Path) -> Result<()>;
}
