//! Unified path management for callout configuration and session files.
//!
//! All paths hang off the platform config directory so the layout is the
//! same on Linux, macOS, and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for callout.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/callout/           # Config directory
/// ├── config.toml              # Application configuration
/// ├── sessions/                # Saved session files (session_<id>.json)
/// └── exports/                 # Exported transcripts
/// ```
pub struct CalloutPaths;

impl CalloutPaths {
    /// Returns the callout configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("callout"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the sessions directory.
    pub fn sessions_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("sessions"))
    }

    /// Returns the path to the exports directory.
    pub fn exports_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("exports"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = CalloutPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("callout"));
    }

    #[test]
    fn test_config_file() {
        let config_file = CalloutPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = CalloutPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_sessions_dir() {
        let sessions_dir = CalloutPaths::sessions_dir().unwrap();
        assert!(sessions_dir.ends_with("sessions"));
        let config_dir = CalloutPaths::config_dir().unwrap();
        assert!(sessions_dir.starts_with(&config_dir));
    }

    #[test]
    fn test_exports_dir() {
        let exports_dir = CalloutPaths::exports_dir().unwrap();
        assert!(exports_dir.ends_with("exports"));
        let config_dir = CalloutPaths::config_dir().unwrap();
        assert!(exports_dir.starts_with(&config_dir));
    }
}
