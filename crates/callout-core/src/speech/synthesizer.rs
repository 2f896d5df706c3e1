//! Speech synthesis capability contract.

use crate::config::TtsConfig;
use crate::error::{CalloutError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A text-to-speech engine.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speaks `text` in `language`, returning once playback completes or is
    /// handed off to the audio layer.
    async fn speak(&self, text: &str, language: &str) -> Result<()>;

    /// Interrupts any in-progress playback.
    async fn stop(&self);
}

impl fmt::Debug for dyn SpeechSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn SpeechSynthesizer")
    }
}

/// Supported synthesis engine families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynthesizerKind {
    Pyttsx,
    GoogleTts,
}

impl FromStr for SynthesizerKind {
    type Err = CalloutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pyttsx" => Ok(Self::Pyttsx),
            "gtts" | "google" => Ok(Self::GoogleTts),
            other => Err(CalloutError::backend_unavailable("synthesis", other)),
        }
    }
}

impl fmt::Display for SynthesizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pyttsx => write!(f, "pyttsx"),
            Self::GoogleTts => write!(f, "gtts"),
        }
    }
}

type SynthesizerConstructor =
    Arc<dyn Fn(&TtsConfig) -> Result<Arc<dyn SpeechSynthesizer>> + Send + Sync>;

/// Registry of constructable synthesizers.
#[derive(Default)]
pub struct SynthesizerRegistry {
    constructors: HashMap<SynthesizerKind, SynthesizerConstructor>,
}

impl SynthesizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: SynthesizerKind, constructor: F)
    where
        F: Fn(&TtsConfig) -> Result<Arc<dyn SpeechSynthesizer>> + Send + Sync + 'static,
    {
        self.constructors.insert(kind, Arc::new(constructor));
    }

    pub fn available(&self) -> Vec<SynthesizerKind> {
        self.constructors.keys().copied().collect()
    }

    /// Builds the synthesizer named by `config.engine`.
    ///
    /// # Errors
    ///
    /// `BackendUnavailable` when nothing usable is registered for the name.
    pub fn create(&self, config: &TtsConfig) -> Result<Arc<dyn SpeechSynthesizer>> {
        let kind = SynthesizerKind::from_str(&config.engine)?;
        let constructor = self
            .constructors
            .get(&kind)
            .ok_or_else(|| CalloutError::backend_unavailable("synthesis", config.engine.clone()))?;
        tracing::info!("Creating {} synthesizer", kind);
        constructor(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSynthesizer {
        spoken: Mutex<Vec<(String, String)>>,
    }

    impl RecordingSynthesizer {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                spoken: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for RecordingSynthesizer {
        async fn speak(&self, text: &str, language: &str) -> Result<()> {
            self.spoken
                .lock()
                .unwrap()
                .push((text.to_string(), language.to_string()));
            Ok(())
        }

        async fn stop(&self) {}
    }

    #[test]
    fn kind_names_parse_with_aliases() {
        assert_eq!("pyttsx".parse::<SynthesizerKind>().unwrap(), SynthesizerKind::Pyttsx);
        assert_eq!("gtts".parse::<SynthesizerKind>().unwrap(), SynthesizerKind::GoogleTts);
        assert_eq!("GOOGLE".parse::<SynthesizerKind>().unwrap(), SynthesizerKind::GoogleTts);
        assert!("espeak".parse::<SynthesizerKind>().is_err());
    }

    #[tokio::test]
    async fn registry_constructs_and_speaks() {
        let mut registry = SynthesizerRegistry::new();
        registry.register(SynthesizerKind::Pyttsx, |_| Ok(RecordingSynthesizer::new()));

        let synthesizer = registry.create(&TtsConfig::default()).unwrap();
        synthesizer.speak("enemy flank", "en").await.unwrap();
    }

    #[test]
    fn unregistered_engine_is_unavailable() {
        let registry = SynthesizerRegistry::new();
        let err = registry.create(&TtsConfig::default()).unwrap_err();
        assert!(err.is_backend_unavailable());
    }
}
