//! Application configuration.
//!
//! Configuration is an explicit value passed to component constructors, not a
//! process-wide singleton. The infrastructure crate loads it from
//! `config.toml`; everything here also works from `AppConfig::default()`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub translation: TranslationConfig,
    pub recognition: RecognitionConfig,
    pub tts: TtsConfig,
}

/// Session persistence and autosave settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Save the session periodically in the background.
    pub auto_save: bool,
    /// Seconds between autosaves.
    pub auto_save_interval_secs: u64,
    /// Directory for session files. Defaults to the user config dir.
    pub save_dir: Option<PathBuf>,
    /// Directory for exports. Defaults to the user config dir.
    pub export_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_save: true,
            auto_save_interval_secs: 300,
            save_dir: None,
            export_dir: None,
        }
    }
}

impl SessionConfig {
    /// Resolved directory for session files.
    pub fn sessions_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .unwrap_or_else(|| default_app_dir().join("sessions"))
    }

    /// Resolved directory for exported transcripts.
    pub fn exports_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| default_app_dir().join("exports"))
    }
}

/// Translation service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslationConfig {
    /// Which backend to construct ("google", "libre", ...).
    pub service: String,
    /// Language the local user speaks.
    pub my_language: String,
    /// Language to translate incoming speech into.
    pub target_language: String,
    /// Memoize translations in a bounded cache.
    pub cache_translations: bool,
    /// Maximum number of cached translations.
    pub cache_size: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            service: "google".to_string(),
            my_language: "en".to_string(),
            target_language: "es".to_string(),
            cache_translations: true,
            cache_size: 1000,
        }
    }
}

/// Speech recognition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Which engine to construct ("google", "whisper", ...).
    pub engine: String,
    /// Recognition language, or "auto".
    pub language: String,
    /// Capture device index, or None for the system default.
    pub device_index: Option<usize>,
    pub sample_rate: u32,
    /// Upper bound on any single blocking capture wait, in seconds.
    pub timeout_secs: f64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            engine: "google".to_string(),
            language: "auto".to_string(),
            device_index: None,
            sample_rate: 16000,
            timeout_secs: 5.0,
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TtsConfig {
    /// Which engine to construct ("pyttsx", "gtts", ...).
    pub engine: String,
    pub voice: String,
    /// Speaking rate in words per minute.
    pub rate: u32,
    /// Output volume, 0.0 to 1.0.
    pub volume: f64,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            engine: "pyttsx".to_string(),
            voice: "default".to_string(),
            rate: 150,
            volume: 0.8,
        }
    }
}

fn default_app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("callout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert!(config.session.auto_save);
        assert_eq!(config.session.auto_save_interval_secs, 300);
        assert_eq!(config.translation.cache_size, 1000);
        assert_eq!(config.translation.target_language, "es");
        assert_eq!(config.recognition.sample_rate, 16000);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [translation]
            target_language = "fr"
            "#,
        )
        .unwrap();
        assert_eq!(config.translation.target_language, "fr");
        assert_eq!(config.translation.service, "google");
        assert!(config.session.auto_save);
    }

    #[test]
    fn explicit_dirs_win_over_defaults() {
        let config = SessionConfig {
            save_dir: Some(PathBuf::from("/tmp/sessions")),
            ..Default::default()
        };
        assert_eq!(config.sessions_dir(), PathBuf::from("/tmp/sessions"));
    }
}
