//! Session domain module.
//!
//! - `message`: utterance model and transport record
//! - `stats`: running statistics and the stats report
//! - `model`: persisted session record
//! - `repository`: persistence trait (implemented in infrastructure)
//! - `export`: export formats and exporter trait
//! - `manager`: session lifecycle management

mod export;
mod manager;
mod message;
mod model;
mod repository;
mod stats;

pub use export::{ExportFormat, SessionExporter};
pub use manager::SessionManager;
pub use message::{MessageDirection, MessageRecord, VoiceMessage};
pub use model::SessionRecord;
pub use repository::SessionRepository;
pub use stats::{format_duration, SessionReport, SessionStats};
