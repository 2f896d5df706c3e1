//! Translation backend contract and selection.
//!
//! Concrete backends (network clients, local models) live outside this crate.
//! Selection is a construction-time decision: callers register constructors
//! for the kinds they can actually provide, once at startup, and the factory
//! fails with [`CalloutError::BackendUnavailable`] for anything else. No
//! availability probing happens after that.

use crate::config::TranslationConfig;
use crate::error::{CalloutError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A pluggable translation engine.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translates `text` into `target`. `source` may be "auto".
    ///
    /// Any blocking work in here must carry a bounded timeout; expiry is a
    /// recoverable error, not a hang.
    async fn translate(&self, text: &str, target: &str, source: &str) -> Result<String>;

    /// Best-effort language detection.
    async fn detect(&self, text: &str) -> Result<String>;
}

impl fmt::Debug for dyn TranslationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn TranslationBackend")
    }
}

/// Supported translation backend families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationBackendKind {
    Google,
    Libre,
}

impl FromStr for TranslationBackendKind {
    type Err = CalloutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "libre" => Ok(Self::Libre),
            other => Err(CalloutError::backend_unavailable("translation", other)),
        }
    }
}

impl fmt::Display for TranslationBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => write!(f, "google"),
            Self::Libre => write!(f, "libre"),
        }
    }
}

type BackendConstructor =
    Arc<dyn Fn(&TranslationConfig) -> Result<Arc<dyn TranslationBackend>> + Send + Sync>;

/// Registry of constructable translation backends.
#[derive(Default)]
pub struct TranslationBackendRegistry {
    constructors: HashMap<TranslationBackendKind, BackendConstructor>,
}

impl TranslationBackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for `kind`, replacing any previous one.
    pub fn register<F>(&mut self, kind: TranslationBackendKind, constructor: F)
    where
        F: Fn(&TranslationConfig) -> Result<Arc<dyn TranslationBackend>> + Send + Sync + 'static,
    {
        self.constructors.insert(kind, Arc::new(constructor));
    }

    /// Kinds a backend can currently be built for.
    pub fn available(&self) -> Vec<TranslationBackendKind> {
        self.constructors.keys().copied().collect()
    }

    /// Builds the backend named by `config.service`.
    ///
    /// # Errors
    ///
    /// `BackendUnavailable` when the name is unknown or nothing is registered
    /// for it. Fatal at construction, surfaced to the caller.
    pub fn create(&self, config: &TranslationConfig) -> Result<Arc<dyn TranslationBackend>> {
        let kind = TranslationBackendKind::from_str(&config.service)?;
        let constructor = self.constructors.get(&kind).ok_or_else(|| {
            CalloutError::backend_unavailable("translation", config.service.clone())
        })?;
        tracing::info!("Creating {} translation backend", kind);
        constructor(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoBackend;

    #[async_trait]
    impl TranslationBackend for EchoBackend {
        async fn translate(&self, text: &str, _target: &str, _source: &str) -> Result<String> {
            Ok(text.to_string())
        }

        async fn detect(&self, _text: &str) -> Result<String> {
            Ok("en".to_string())
        }
    }

    #[test]
    fn unregistered_kind_is_unavailable() {
        let registry = TranslationBackendRegistry::new();
        let config = TranslationConfig::default();
        let err = registry.create(&config).unwrap_err();
        assert!(err.is_backend_unavailable());
    }

    #[test]
    fn unknown_name_is_unavailable() {
        let registry = TranslationBackendRegistry::new();
        let config = TranslationConfig {
            service: "babelfish".to_string(),
            ..Default::default()
        };
        assert!(registry.create(&config).unwrap_err().is_backend_unavailable());
    }

    #[tokio::test]
    async fn registered_backend_is_constructed() {
        let mut registry = TranslationBackendRegistry::new();
        registry.register(TranslationBackendKind::Google, |_| Ok(Arc::new(EchoBackend)));

        assert_eq!(registry.available(), vec![TranslationBackendKind::Google]);

        let backend = registry.create(&TranslationConfig::default()).unwrap();
        assert_eq!(backend.translate("gg", "es", "en").await.unwrap(), "gg");
    }
}
