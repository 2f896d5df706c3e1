//! Configuration service implementation.
//!
//! Loads the application configuration from the configuration file
//! (~/.config/callout/config.toml), writing a default file on first run.

use crate::paths::CalloutPaths;
use callout_core::config::AppConfig;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the application configuration.
///
/// Reads config.toml once and caches the result to avoid repeated file I/O.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
    /// Overrides the default config file location, mainly for tests.
    path_override: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService. The configuration is loaded lazily on
    /// first access.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ConfigService reading from an explicit file path.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path_override: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Falls back to defaults when the file cannot be read or parsed; a
    /// broken config file never takes the application down.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {}", err);
            AppConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn config_path(&self) -> Result<PathBuf, String> {
        match &self.path_override {
            Some(path) => Ok(path.clone()),
            None => CalloutPaths::config_file().map_err(|e| e.to_string()),
        }
    }

    /// Loads AppConfig from the config file, creating it with defaults when
    /// missing.
    fn load_config(&self) -> Result<AppConfig, String> {
        let config_path = self.config_path()?;

        if !config_path.exists() {
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create config directory: {}", e))?;
            }
            let rendered = toml::to_string_pretty(&default_config)
                .map_err(|e| format!("Failed to serialize default config: {}", e))?;
            std::fs::write(&config_path, rendered)
                .map_err(|e| format!("Failed to write default config: {}", e))?;
            tracing::info!("Created default config at {}", config_path.display());
            return Ok(default_config);
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = service.get_config();
        assert_eq!(config.translation.service, "google");
        assert!(path.exists());
    }

    #[test]
    fn existing_file_is_loaded_and_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[translation]\nservice = \"libre\"\ntarget_language = \"ja\"\n",
        )
        .unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config();
        assert_eq!(config.translation.service, "libre");
        assert_eq!(config.translation.target_language, "ja");
        // Unspecified sections come from defaults.
        assert!(config.session.auto_save);

        // Cached: editing the file is invisible until invalidation.
        std::fs::write(&path, "[translation]\nservice = \"google\"\n").unwrap();
        assert_eq!(service.get_config().translation.service, "libre");

        service.invalidate_cache();
        assert_eq!(service.get_config().translation.service, "google");
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config();
        assert_eq!(config.translation.service, "google");
    }
}
