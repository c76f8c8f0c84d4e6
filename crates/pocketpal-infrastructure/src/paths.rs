//! Unified path management for PocketPal files.
//!
//! Paths are resolved via the `dirs` crate so they follow platform
//! conventions (XDG on Linux, Application Support on macOS, AppData on Windows).

use std::path::PathBuf;

const APP_DIR: &str = "pocketpal";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for PocketPal.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/pocketpal/         # Config directory
/// ├── config.toml              # Server configuration
/// └── logs/                    # Log files (when file logging is enabled)
///     └── pocketpal.log.YYYY-MM-DD
/// ```
pub struct PocketPalPaths;

impl PocketPalPaths {
    /// Returns the PocketPal configuration directory (e.g. `~/.config/pocketpal/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Resolution depends on the environment having a home directory, so
    // each test only checks layout when one is available.

    #[test]
    fn test_config_dir() {
        if let Ok(config_dir) = PocketPalPaths::config_dir() {
            assert!(config_dir.ends_with("pocketpal"));
        }
    }

    #[test]
    fn test_config_file() {
        if let Ok(config_file) = PocketPalPaths::config_file() {
            assert!(config_file.ends_with("config.toml"));
            let config_dir = PocketPalPaths::config_dir().unwrap();
            assert!(config_file.starts_with(&config_dir));
        }
    }

    #[test]
    fn test_logs_dir() {
        if let Ok(logs_dir) = PocketPalPaths::logs_dir() {
            assert!(logs_dir.ends_with("logs"));
            let config_dir = PocketPalPaths::config_dir().unwrap();
            assert!(logs_dir.starts_with(&config_dir));
        }
    }

    #[test]
    fn test_path_error_display() {
        assert_eq!(
            PathError::HomeDirNotFound.to_string(),
            "Cannot find home directory"
        );
    }
}
