//! Error types for the callout application.

use thiserror::Error;

/// A shared error type for the entire callout application.
///
/// Expected runtime failures (a missing session file, a backend that times
/// out) are reported as soft results by the components themselves; this type
/// covers the failures that cross component boundaries, such as construction
/// errors and I/O problems surfaced to logging.
#[derive(Error, Debug)]
pub enum CalloutError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable backend could be constructed for a capability.
    ///
    /// This is fatal at construction time: the caller that requested the
    /// component decides whether to abort or degrade.
    #[error("No usable {capability} backend: '{requested}' is not registered")]
    BackendUnavailable {
        capability: &'static str,
        requested: String,
    },

    /// A translation/recognition/synthesis call failed
    #[error("Backend call failed: {0}")]
    Backend(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalloutError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a BackendUnavailable error
    pub fn backend_unavailable(capability: &'static str, requested: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            capability,
            requested: requested.into(),
        }
    }

    /// Creates a Backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a BackendUnavailable error
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<std::io::Error> for CalloutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CalloutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CalloutError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CalloutError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CalloutError>`.
pub type Result<T> = std::result::Result<T, CalloutError>;
