//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/pocketpal/config.toml by default).

use crate::paths::PocketPalPaths;
use pocketpal_core::config::RootConfig;
use pocketpal_core::error::{PocketPalError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// A missing or empty file is not an error: the defaults are used. A file
/// that exists but cannot be parsed is reported, so a typo never silently
/// falls back to defaults.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` means the platform default location.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading from the default config file.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the file this service reads from.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => PocketPalPaths::config_file().map_err(|e| PocketPalError::config(e.to_string())),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_from(&self.config_path()?)?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Reads and parses a config file, falling back to defaults if it is
    /// absent or blank.
    pub fn load_from(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        let config: RootConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Renders a configuration as pretty TOML.
    pub fn to_toml(config: &RootConfig) -> Result<String> {
        Ok(toml::to_string_pretty(config)?)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
