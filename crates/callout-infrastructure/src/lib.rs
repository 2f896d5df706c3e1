pub mod config_service;
pub mod export;
pub mod json_session_repository;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::export::{FileExporter, PdfRenderer};
pub use crate::json_session_repository::JsonSessionRepository;
pub use crate::paths::CalloutPaths;
