//! Translation module: backend contract, facade, and bounded cache.

mod backend;
mod cache;
mod service;

pub use backend::{TranslationBackend, TranslationBackendKind, TranslationBackendRegistry};
pub use cache::{CacheStats, TranslationCache};
pub use service::{CachedTranslator, TranslationService};
