//! Speech recognition capability contract.
//!
//! Concrete recognizers (microphone capture + a recognition engine) are
//! external collaborators; this crate only fixes the contract the session
//! layer drives. Implementations run their capture loop on their own worker
//! and observe the stop flag at each iteration boundary. Every blocking wait
//! carries a bounded timeout; a timed-out capture is a retry, not a failure.

use crate::config::RecognitionConfig;
use crate::error::{CalloutError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// An audio input device as enumerated by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    pub index: usize,
    pub name: String,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioDevice {
    /// The platform default microphone.
    pub fn default_input() -> Self {
        Self {
            index: 0,
            name: "Default Microphone".to_string(),
            sample_rate: 16000,
            channels: 1,
        }
    }
}

/// Invoked with each finalized utterance, off the state-owning thread.
pub type TranscriptCallback = Arc<dyn Fn(String) + Send + Sync>;

/// A speech recognition engine driven by the application layer.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Begins a listen session on `device`, delivering recognized text to
    /// `on_text`.
    ///
    /// # Errors
    ///
    /// Fails if a session is already running or the device cannot be opened.
    async fn start(&self, device: &AudioDevice, on_text: TranscriptCallback) -> Result<()>;

    /// Requests a cooperative stop of the current listen session.
    async fn stop(&self);

    fn is_listening(&self) -> bool;
}

impl fmt::Debug for dyn SpeechRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn SpeechRecognizer")
    }
}

/// Supported recognition engine families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    Google,
    Whisper,
}

impl FromStr for RecognizerKind {
    type Err = CalloutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "whisper" => Ok(Self::Whisper),
            other => Err(CalloutError::backend_unavailable("recognition", other)),
        }
    }
}

impl fmt::Display for RecognizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => write!(f, "google"),
            Self::Whisper => write!(f, "whisper"),
        }
    }
}

type RecognizerConstructor =
    Arc<dyn Fn(&RecognitionConfig) -> Result<Arc<dyn SpeechRecognizer>> + Send + Sync>;

/// Registry of constructable recognizers, populated once at startup.
#[derive(Default)]
pub struct RecognizerRegistry {
    constructors: HashMap<RecognizerKind, RecognizerConstructor>,
}

impl RecognizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: RecognizerKind, constructor: F)
    where
        F: Fn(&RecognitionConfig) -> Result<Arc<dyn SpeechRecognizer>> + Send + Sync + 'static,
    {
        self.constructors.insert(kind, Arc::new(constructor));
    }

    pub fn available(&self) -> Vec<RecognizerKind> {
        self.constructors.keys().copied().collect()
    }

    /// Builds the recognizer named by `config.engine`.
    ///
    /// # Errors
    ///
    /// `BackendUnavailable` when nothing usable is registered for the name.
    pub fn create(&self, config: &RecognitionConfig) -> Result<Arc<dyn SpeechRecognizer>> {
        let kind = RecognizerKind::from_str(&config.engine)?;
        let constructor = self
            .constructors
            .get(&kind)
            .ok_or_else(|| CalloutError::backend_unavailable("recognition", config.engine.clone()))?;
        tracing::info!("Creating {} recognizer", kind);
        constructor(config)
    }
}
